#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::directory::{Directory, parse_directory};
    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    pub const TEST_DIRECTORY: &str = r#"{
        "branches": [
            {"branchName": "Pune", "branchCode": "PN01", "email": "pune@x.com"},
            {"branchName": "Mumbai HQ", "branchCode": "MH01", "email": "ops@x.com"},
            {"branchName": "Nashik", "branchCode": "NS01"}
        ],
        "users": [
            {"name": "Pune", "email": "user-pune@x.com"},
            {"name": "Asha Rao", "email": "asha@x.com", "role": "manager"}
        ],
        "departments": [{"name": "Accounts"}, {"name": "Admin"}],
        "couriers": [
            {"trackingNumber": "TRK-1", "status": "delivered"},
            {"trackingNumber": "TRK-2", "status": "pending"}
        ]
    }"#;

    pub fn test_directory() -> Directory {
        parse_directory(TEST_DIRECTORY).unwrap()
    }

    pub fn test_app() -> App {
        App::new(test_directory())
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    pub fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.handle_key_event(key(KeyCode::Char(ch)));
        }
    }
}
