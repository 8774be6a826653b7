use std::future::Future;

use api_types::{
    ErrorResponse,
    item::{Item, ItemDraft, ItemId},
};
use reqwest::{Response, StatusCode, Url};

use crate::error::{AppError, Result};

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never reached the server, or its answer could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("server error {status}: {message}")]
    Server { status: StatusCode, message: String },
}

/// Remote collection of items.
///
/// Every call is a single round trip with no retry.
pub trait ItemStore {
    fn list_all(&self) -> impl Future<Output = std::result::Result<Vec<Item>, ClientError>> + Send;

    fn create(
        &self,
        draft: &ItemDraft,
    ) -> impl Future<Output = std::result::Result<Item, ClientError>> + Send;

    fn replace(
        &self,
        id: &ItemId,
        draft: &ItemDraft,
    ) -> impl Future<Output = std::result::Result<Item, ClientError>> + Send;

    fn delete(&self, id: &ItemId)
    -> impl Future<Output = std::result::Result<(), ClientError>> + Send;
}

/// JSON-over-HTTP client for a REST collection resource.
#[derive(Debug, Clone)]
pub struct Client {
    collection: Url,
    http: reqwest::Client,
}

impl Client {
    pub fn new(base_url: &str, collection: &str) -> Result<Self> {
        let mut url = Url::parse(base_url)
            .map_err(|err| AppError::Endpoint(format!("invalid base_url: {err}")))?;

        url.path_segments_mut()
            .map_err(|_| AppError::Endpoint(format!("base_url cannot be a base: {base_url}")))?
            .pop_if_empty()
            .extend(collection.split('/').filter(|segment| !segment.is_empty()));

        Ok(Self {
            collection: url,
            http: reqwest::Client::new(),
        })
    }

    /// Full URL of the collection resource.
    pub fn endpoint(&self) -> &Url {
        &self.collection
    }

    fn item_url(&self, id: &ItemId) -> Url {
        let mut url = self.collection.clone();
        // Checked in `new`: the collection URL always has path segments.
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(&id.to_string());
        }
        url
    }
}

async fn check(res: Response) -> std::result::Result<Response, ClientError> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }

    let message = res
        .json::<ErrorResponse>()
        .await
        .map(|err| err.error)
        .unwrap_or_else(|_| "unknown error".to_string());
    Err(ClientError::Server { status, message })
}

impl ItemStore for Client {
    async fn list_all(&self) -> std::result::Result<Vec<Item>, ClientError> {
        let res = self.http.get(self.collection.clone()).send().await?;
        Ok(check(res).await?.json::<Vec<Item>>().await?)
    }

    async fn create(&self, draft: &ItemDraft) -> std::result::Result<Item, ClientError> {
        let res = self
            .http
            .post(self.collection.clone())
            .json(draft)
            .send()
            .await?;
        Ok(check(res).await?.json::<Item>().await?)
    }

    async fn replace(
        &self,
        id: &ItemId,
        draft: &ItemDraft,
    ) -> std::result::Result<Item, ClientError> {
        let res = self.http.put(self.item_url(id)).json(draft).send().await?;
        Ok(check(res).await?.json::<Item>().await?)
    }

    async fn delete(&self, id: &ItemId) -> std::result::Result<(), ClientError> {
        let res = self.http.delete(self.item_url(id)).send().await?;
        check(res).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use server::Collection;

    use super::*;

    async fn spawn_server(items: Collection) -> Client {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = server::spawn_with_listener(items, listener).unwrap();
        Client::new(&format!("http://{addr}"), "items").unwrap()
    }

    fn draft(name: &str, description: &str) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn collection_is_joined_onto_base_path() {
        let client = Client::new("http://localhost:3000", "items").unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:3000/items");

        let client = Client::new("http://host/api/", "/v1/items/").unwrap();
        assert_eq!(client.endpoint().as_str(), "http://host/api/v1/items");
    }

    #[test]
    fn item_url_appends_identifier() {
        let client = Client::new("http://localhost:3000", "items").unwrap();
        assert_eq!(
            client.item_url(&ItemId::Number(7)).as_str(),
            "http://localhost:3000/items/7"
        );
        assert_eq!(
            client.item_url(&ItemId::Text("a b".to_string())).as_str(),
            "http://localhost:3000/items/a%20b"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        assert!(matches!(
            Client::new("not a url", "items"),
            Err(AppError::Endpoint(_))
        ));
        assert!(matches!(
            Client::new("mailto:someone@example.com", "items"),
            Err(AppError::Endpoint(_))
        ));
    }

    #[tokio::test]
    async fn crud_against_resource_server() {
        let client = spawn_server(Collection::new()).await;

        assert!(client.list_all().await.unwrap().is_empty());

        let created = client.create(&draft("A", "a")).await.unwrap();
        assert_eq!(created.id, ItemId::Number(1));

        let updated = client
            .replace(&created.id, &draft("A2", "a"))
            .await
            .unwrap();
        assert_eq!(updated.name, "A2");
        assert_eq!(client.list_all().await.unwrap(), vec![updated.clone()]);

        client.delete(&updated.id).await.unwrap();
        assert!(client.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_success_status_is_a_server_error() {
        let client = spawn_server(Collection::new()).await;

        let err = client.delete(&ItemId::Number(42)).await.unwrap_err();
        match err {
            ClientError::Server { status, message } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(message, "item 42 not found");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_server_is_a_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = Client::new(&format!("http://{addr}"), "items").unwrap();
        assert!(matches!(
            client.list_all().await,
            Err(ClientError::Network(_))
        ));
    }
}
