use std::marker::PhantomData;

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tokio::runtime::Handle;

use crate::operation::{AsyncOperation, Completion};

/// `GET` request issued on a tokio runtime, completing with the response body.
#[derive(Debug, Clone)]
pub struct HttpGet {
    url: Url,
    http_client: Client,
    handle: Handle,
}

impl HttpGet {
    /// Fails with [`NetworkError::Url`] before anything is issued if `url` does not parse.
    pub fn new(url: &str, http_client: Client, handle: Handle) -> Result<Self, NetworkError> {
        let url = Url::parse(url).map_err(|source| NetworkError::Url {
            url: url.to_owned(),
            source,
        })?;

        Ok(Self {
            url,
            http_client,
            handle,
        })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn json<T>(self) -> HttpGetJson<T> {
        HttpGetJson::new(self)
    }

    #[tracing::instrument(name = "http_get", skip_all, fields(url = %self.url))]
    async fn send(self) -> Result<Response, NetworkError> {
        tracing::debug!("Sending request");

        self.http_client
            .get(self.url)
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(NetworkError::Server)
    }
}

impl AsyncOperation for HttpGet {
    type Output = String;

    type Error = NetworkError;

    fn start(self, completion: Completion<Self::Output, Self::Error>) {
        let handle = self.handle.clone();

        handle.spawn(async move {
            let result = match self.send().await {
                Ok(response) => response.text().await.map_err(NetworkError::Server),
                Err(err) => Err(err),
            };

            completion.complete(result);
        });
    }
}

/// Same as [`HttpGet`], decoding the body as JSON.
#[derive(Debug, Clone)]
pub struct HttpGetJson<T> {
    get: HttpGet,
    _body: PhantomData<fn() -> T>,
}

impl<T> HttpGetJson<T> {
    pub const fn new(get: HttpGet) -> Self {
        Self {
            get,
            _body: PhantomData,
        }
    }
}

impl<T> AsyncOperation for HttpGetJson<T>
where
    T: DeserializeOwned + Send + 'static,
{
    type Output = T;

    type Error = NetworkError;

    fn start(self, completion: Completion<Self::Output, Self::Error>) {
        let handle = self.get.handle.clone();

        handle.spawn(async move {
            let result = match self.get.send().await {
                Ok(response) => response.json::<T>().await.map_err(NetworkError::Server),
                Err(err) => Err(err),
            };

            completion.complete(result);
        });
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("Invalid URL {url}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Request failed: {0}")]
    Server(#[source] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use tokio::runtime::Runtime;

    use crate::{bridge::SyncBridge, test::init_tracing};

    use super::*;

    #[test]
    fn malformed_url_is_rejected_before_issuing() {
        init_tracing();

        let runtime = Runtime::new().expect("Failed to build runtime");

        let prepared = HttpGet::new("not a url", Client::new(), runtime.handle().clone());

        let result = SyncBridge::new().call(prepared);

        let err = match result {
            Err(err @ NetworkError::Url { .. }) => err,
            other => panic!("Expected URL error, got {other:?}"),
        };

        assert!(matches!(&err, NetworkError::Url { url, .. } if url == "not a url"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn unreachable_server_is_an_operation_error() {
        init_tracing();

        let runtime = Runtime::new().expect("Failed to build runtime");

        let prepared = HttpGet::new(
            "http://127.0.0.1:1/todos/1",
            Client::new(),
            runtime.handle().clone(),
        );

        let result = SyncBridge::new().call(prepared);

        assert!(matches!(result, Err(NetworkError::Server(_))));
    }

    #[test]
    fn json_keeps_the_parsed_url() {
        init_tracing();

        let runtime = Runtime::new().expect("Failed to build runtime");

        let prepared = HttpGet::new(
            "http://127.0.0.1:1/users/1",
            Client::new(),
            runtime.handle().clone(),
        )
        .map(HttpGet::json::<Vec<u32>>);

        assert_eq!(
            prepared.as_ref().map(|get| get.get.url().path()).ok(),
            Some("/users/1")
        );

        let result = SyncBridge::new().call(prepared);

        assert!(matches!(result, Err(NetworkError::Server(_))));
    }
}
