use std::time::Duration;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::{ApiError, Session};
use crate::directory::{Branch, Courier, Department, Directory, UserSummary};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

const BRANCHES_PATH: &str = "/api/branches";
const USERS_PATH: &str = "/api/users";
const DEPARTMENTS_PATH: &str = "/api/departments";
const COURIERS_PATH: &str = "/api/couriers";

/// Map an HTTP status to an error; 401 is always `Unauthorized`
pub fn check_status(status: StatusCode, body: &str) -> Result<(), ApiError> {
    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::Unauthorized);
    }
    if !status.is_success() {
        let message = if body.trim().is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        } else {
            body.trim().to_string()
        };
        return Err(ApiError::Api {
            code: status.as_u16(),
            message,
        });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    session: Session,
}

impl ApiClient {
    pub fn new(session: Session) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { http, session })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.session.endpoint(path);
        log::debug!("GET {}", url);

        let mut request = self.http.get(&url);
        if let Some(token) = self.session.token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        check_status(status, &body)?;

        serde_json::from_str(&body).map_err(|e| ApiError::Parse(format!("{}: {}", path, e)))
    }

    pub async fn fetch_branches(&self) -> Result<Vec<Branch>, ApiError> {
        self.get_json(BRANCHES_PATH).await
    }

    pub async fn fetch_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.get_json(USERS_PATH).await
    }

    pub async fn fetch_departments(&self) -> Result<Vec<Department>, ApiError> {
        self.get_json(DEPARTMENTS_PATH).await
    }

    pub async fn fetch_couriers(&self) -> Result<Vec<Courier>, ApiError> {
        self.get_json(COURIERS_PATH).await
    }

    pub async fn fetch_directory(&self) -> Result<Directory, ApiError> {
        let (branches, users, departments, couriers) = tokio::try_join!(
            self.fetch_branches(),
            self.fetch_users(),
            self.fetch_departments(),
            self.fetch_couriers(),
        )?;

        Ok(Directory {
            branches,
            users,
            departments,
            couriers,
        })
    }
}

/// Fetch the directory from a synchronous caller (the TUI is not async)
pub fn fetch_directory_blocking(session: Session) -> Result<Directory, ApiError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let client = ApiClient::new(session)?;
    runtime.block_on(client.fetch_directory())
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
