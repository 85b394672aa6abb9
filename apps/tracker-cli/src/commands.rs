//! Command execution. Every command resolves to the JSON it prints.

use anyhow::{Context, bail};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracker_client::{ListQuery, Resource, TrackerApi};
use tracker_core::ApiError;
use tracker_core::ports::{HttpRequest, Method, QueryParams};
use tracker_shared::format::validate_email;

use crate::cli::{Command, ResourceAction};

pub async fn run(api: &TrackerApi, command: Command) -> anyhow::Result<Value> {
    match command {
        Command::Login { email, password } => {
            if !validate_email(&email) {
                bail!("`{}` is not a valid email address", email);
            }
            let response = api.login(&email, &password).await.map_err(describe)?;
            Ok(json!({ "user": response.user }))
        }
        Command::Logout => to_json(api.logout().await.map_err(describe)?),
        Command::Whoami => whoami(api).await,
        Command::Refresh => {
            api.refresh().await.map_err(describe)?;
            Ok(json!({ "message": "Access token refreshed" }))
        }
        Command::ChangePassword { current, new } => {
            to_json(api.change_password(&current, &new).await.map_err(describe)?)
        }
        Command::Startups(action) => run_resource(api.startups(), action).await,
        Command::Investors(action) => run_resource(api.investors(), action).await,
        Command::Jobs(action) => run_resource(api.jobs(), action).await,
        Command::News(action) => run_resource(api.news(), action).await,
        Command::Users(action) => run_resource(api.users(), action).await,
        Command::Search {
            query,
            industry,
            paging,
        } => {
            let mut filters = QueryParams::new();
            if let Some(industry) = industry {
                filters.insert("industry".to_string(), industry.into());
            }
            let page = api
                .search_startups(&query, &filters, paging.page, paging.per_page)
                .await
                .map_err(describe)?;
            to_json(page)
        }
        Command::Request {
            method,
            endpoint,
            query,
            data,
        } => {
            let method = Method::from(method);
            let mut request = HttpRequest::new(method, endpoint);
            if !query.is_empty() {
                if method != Method::Get {
                    bail!("--query is only sent with GET requests");
                }
                request = request.with_query(query.into_iter().collect());
            }
            if let Some(data) = data {
                if !matches!(method, Method::Post | Method::Put) {
                    bail!("--data is only sent with POST and PUT requests");
                }
                request = request.with_body(data);
            }
            api.client().execute(request).await.map_err(describe)
        }
    }
}

async fn run_resource<T>(resource: Resource<'_, T>, action: ResourceAction) -> anyhow::Result<Value>
where
    T: DeserializeOwned + Serialize,
{
    match action {
        ResourceAction::List { paging, filters } => {
            let mut query = ListQuery::new().page(paging.page).per_page(paging.per_page);
            for (key, value) in filters {
                query = query.filter(key, value);
            }
            to_json(resource.list(&query).await.map_err(describe)?)
        }
        ResourceAction::Show { id } => to_json(resource.get(id).await.map_err(describe)?),
        ResourceAction::Create { data } => to_json(resource.create(&data).await.map_err(describe)?),
        ResourceAction::Update { id, data } => {
            to_json(resource.update(id, &data).await.map_err(describe)?)
        }
        ResourceAction::Delete { id } => to_json(resource.delete(id).await.map_err(describe)?),
    }
}

async fn whoami(api: &TrackerApi) -> anyhow::Result<Value> {
    let session = api.session();
    if !session.is_authenticated().await {
        return Ok(json!({ "authenticated": false }));
    }

    let expired = session.is_token_expired().await;
    let Some(claims) = session.decode_token().await else {
        return Ok(json!({ "authenticated": true, "expired": expired }));
    };

    Ok(json!({
        "authenticated": true,
        "user_id": claims.user_id(),
        "expired": expired,
        "expires_at": claims.expires_at().map(|t| t.to_rfc3339()),
        "claims": Value::Object(claims.into_payload()),
    }))
}

fn to_json<T: Serialize>(value: T) -> anyhow::Result<Value> {
    serde_json::to_value(value).context("Failed to render response")
}

/// Attach the API's own error message to status errors.
fn describe(err: ApiError) -> anyhow::Error {
    let message = match (err.status(), err.error_message()) {
        (Some(status), Some(message)) => Some(format!("{} ({})", message, status)),
        _ => None,
    };
    match (err, message) {
        (ApiError::Unauthenticated, _) => {
            anyhow::anyhow!("Not logged in. Run `tracker login <email>` first")
        }
        (err, Some(message)) => anyhow::Error::new(err).context(message),
        (err, None) => anyhow::Error::new(err),
    }
}
