//! Typed access to the tracker API's resources and auth endpoints.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use tracker_core::ApiError;
use tracker_core::domain::{Investor, JobPosting, NewsArticle, Startup, User};
use tracker_core::ports::{HttpRequest, Method, QueryParams, QueryValue};
use tracker_shared::constants::MAX_RESULTS_PER_PAGE;
use tracker_shared::dto::{ChangePasswordRequest, LoginRequest, LoginResponse, RefreshResponse};
use tracker_shared::{MessageResponse, Page};

use crate::client::ApiClient;
use crate::interceptor::AUTHORIZATION_HEADER;
use crate::session::AuthSession;

/// Paging and filters for a listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub filters: QueryParams,
}

impl ListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn filter(mut self, name: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.filters.insert(name.into(), value.into());
        self
    }

    /// Query parameters for the request. Page numbers start at 1 and page
    /// sizes are clamped to what the API serves.
    pub fn to_params(&self) -> QueryParams {
        let mut params = self.filters.clone();
        if let Some(page) = self.page {
            params.insert("page".to_string(), page.max(1).into());
        }
        if let Some(per_page) = self.per_page {
            params.insert(
                "per_page".to_string(),
                per_page.clamp(1, MAX_RESULTS_PER_PAGE).into(),
            );
        }
        params
    }
}

/// CRUD endpoints of one resource collection.
pub struct Resource<'a, T> {
    client: &'a ApiClient,
    path: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<'a, T> Resource<'a, T>
where
    T: DeserializeOwned,
{
    fn new(client: &'a ApiClient, path: &'static str) -> Self {
        Self {
            client,
            path,
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &'static str {
        self.path
    }

    fn collection(&self) -> String {
        format!("{}/", self.path)
    }

    fn item(&self, id: i64) -> String {
        format!("{}/{}", self.path, id)
    }

    pub async fn list(&self, query: &ListQuery) -> Result<Page<T>, ApiError> {
        self.client
            .get_as(&self.collection(), Some(query.to_params()))
            .await
    }

    pub async fn get(&self, id: i64) -> Result<T, ApiError> {
        self.client.get_as(&self.item(id), None).await
    }

    pub async fn create<B>(&self, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.client.post_as(&self.collection(), body).await
    }

    pub async fn update<B>(&self, id: i64, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
    {
        self.client.put_as(&self.item(id), body).await
    }

    pub async fn delete(&self, id: i64) -> Result<MessageResponse, ApiError> {
        self.client.delete_as(&self.item(id)).await
    }
}

/// The tracker API: auth flows plus one [`Resource`] per collection.
#[derive(Clone)]
pub struct TrackerApi {
    client: ApiClient,
    session: AuthSession,
}

impl TrackerApi {
    pub fn new(client: ApiClient, session: AuthSession) -> Self {
        Self { client, session }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn session(&self) -> &AuthSession {
        &self.session
    }

    /// Log in and store the returned tokens.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self.client.post_as("/auth/login", &request).await?;

        self.session.set_auth_token(&response.access_token).await?;
        if let Some(refresh_token) = &response.refresh_token {
            self.session.set_refresh_token(refresh_token).await?;
        }

        tracing::info!("Logged in");
        Ok(response)
    }

    /// Trade the stored refresh token for a new access token.
    pub async fn refresh(&self) -> Result<RefreshResponse, ApiError> {
        let refresh_token = self
            .session
            .get_refresh_token()
            .await?
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::Unauthenticated)?;

        let mut request = HttpRequest::new(Method::Post, "/auth/refresh");
        request.set_header(AUTHORIZATION_HEADER, format!("Bearer {}", refresh_token));

        let response: RefreshResponse = self.client.execute_as(request).await?;
        self.session.set_auth_token(&response.access_token).await?;

        tracing::debug!("Access token refreshed");
        Ok(response)
    }

    /// Log out on the API, then forget the stored tokens.
    ///
    /// Tokens are cleared even when the API call fails; that failure is
    /// returned afterwards.
    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        let outcome = self
            .client
            .post_as::<MessageResponse, _>("/auth/logout", &serde_json::json!({}))
            .await;

        self.session.clear().await?;
        tracing::info!("Logged out");

        outcome
    }

    pub async fn change_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<MessageResponse, ApiError> {
        let request = ChangePasswordRequest {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        self.client.post_as("/auth/change-password", &request).await
    }

    pub fn startups(&self) -> Resource<'_, Startup> {
        Resource::new(&self.client, "/startups")
    }

    pub fn investors(&self) -> Resource<'_, Investor> {
        Resource::new(&self.client, "/investors")
    }

    pub fn jobs(&self) -> Resource<'_, JobPosting> {
        Resource::new(&self.client, "/jobs")
    }

    pub fn news(&self) -> Resource<'_, NewsArticle> {
        Resource::new(&self.client, "/news")
    }

    pub fn users(&self) -> Resource<'_, User> {
        Resource::new(&self.client, "/users")
    }

    /// Search startups by name, narrowed by `filters` (e.g. `industry`).
    ///
    /// An empty query lists everything that matches the filters.
    pub async fn search_startups(
        &self,
        query: &str,
        filters: &QueryParams,
        page: u32,
        per_page: u32,
    ) -> Result<Page<Startup>, ApiError> {
        let mut list = ListQuery {
            page: Some(page),
            per_page: Some(per_page),
            filters: filters.clone(),
        };

        let query = query.trim();
        if !query.is_empty() {
            list = list.filter("name", query);
        }

        self.startups().list(&list).await
    }
}
