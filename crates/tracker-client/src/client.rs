//! The API client.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use tracker_core::ApiError;
use tracker_core::ports::{
    HttpRequest, HttpTransport, Method, QueryParams, RequestInterceptor, ResponseInterceptor,
};

use crate::interceptor::{BearerAuth, ErrorLogger, RequestIdHeader};
use crate::session::AuthSession;

/// Uniform async interface over the tracker API.
///
/// Each call is independent: no retries, no backoff, no ordering between
/// concurrent calls. Cloning is cheap and clones share the transport.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClient {
    /// Client with no interceptors.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self::builder(transport).build()
    }

    pub fn builder(transport: Arc<dyn HttpTransport>) -> ApiClientBuilder {
        ApiClientBuilder {
            transport,
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
        }
    }

    /// Client that authenticates from `session`, tags requests with an id
    /// and logs failures.
    pub fn with_session(transport: Arc<dyn HttpTransport>, session: AuthSession) -> Self {
        Self::builder(transport)
            .request_interceptor(BearerAuth::new(session))
            .request_interceptor(RequestIdHeader)
            .response_interceptor(ErrorLogger)
            .build()
    }

    /// GET `endpoint`, resolving to the response body.
    pub async fn get(&self, endpoint: &str, params: Option<QueryParams>) -> Result<Value, ApiError> {
        let request =
            HttpRequest::new(Method::Get, endpoint).with_query(params.unwrap_or_default());
        self.execute(request).await
    }

    /// POST `body` as JSON to `endpoint`.
    pub async fn post<B>(&self, endpoint: &str, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = HttpRequest::new(Method::Post, endpoint).with_body(encode(body)?);
        self.execute(request).await
    }

    /// PUT `body` as JSON to `endpoint`.
    pub async fn put<B>(&self, endpoint: &str, body: &B) -> Result<Value, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = HttpRequest::new(Method::Put, endpoint).with_body(encode(body)?);
        self.execute(request).await
    }

    /// DELETE `endpoint`. No body is sent.
    pub async fn delete(&self, endpoint: &str) -> Result<Value, ApiError> {
        self.execute(HttpRequest::new(Method::Delete, endpoint))
            .await
    }

    pub async fn get_as<T>(&self, endpoint: &str, params: Option<QueryParams>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        decode(self.get(endpoint, params).await?)
    }

    pub async fn post_as<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        decode(self.post(endpoint, body).await?)
    }

    pub async fn put_as<T, B>(&self, endpoint: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        decode(self.put(endpoint, body).await?)
    }

    pub async fn delete_as<T>(&self, endpoint: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        decode(self.delete(endpoint).await?)
    }

    pub async fn execute_as<T>(&self, request: HttpRequest) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        decode(self.execute(request).await?)
    }

    /// Run `request` through the interceptors and the transport.
    ///
    /// A 2xx response resolves to its body. Any other status becomes
    /// [`ApiError::Status`] carrying the body as sent; a transport failure is
    /// returned as [`ApiError::Transport`] unchanged.
    pub async fn execute(&self, mut request: HttpRequest) -> Result<Value, ApiError> {
        for interceptor in &self.request_interceptors {
            interceptor.on_request(&mut request).await?;
        }

        tracing::debug!(method = %request.method, endpoint = %request.endpoint, "Sending request");

        let outcome = match self.transport.send(request.clone()).await {
            Ok(response) if response.is_success() => Ok(response),
            Ok(response) => Err(ApiError::Status {
                status: response.status,
                body: response.body,
            }),
            Err(e) => Err(ApiError::Transport(e)),
        };

        match outcome {
            Ok(response) => {
                for interceptor in &self.response_interceptors {
                    interceptor.on_response(&request, &response).await;
                }
                Ok(response.body)
            }
            Err(error) => {
                for interceptor in &self.response_interceptors {
                    interceptor.on_error(&request, &error).await;
                }
                Err(error)
            }
        }
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
}

fn decode<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Builder for [`ApiClient`]. Interceptors run in the order they are added.
pub struct ApiClientBuilder {
    transport: Arc<dyn HttpTransport>,
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
}

impl ApiClientBuilder {
    pub fn request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn response_interceptor(mut self, interceptor: impl ResponseInterceptor + 'static) -> Self {
        self.response_interceptors.push(Arc::new(interceptor));
        self
    }

    pub fn build(self) -> ApiClient {
        ApiClient {
            transport: self.transport,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
        }
    }
}
