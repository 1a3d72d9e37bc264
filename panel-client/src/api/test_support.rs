//! Test double for the HTTP client trait

use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::HttpClient;
use crate::ClientResult;

/// Records request paths and replays a canned JSON payload
pub struct StubHttp {
    response: Value,
    gets: Mutex<Vec<String>>,
    posts: Mutex<Vec<String>>,
}

impl StubHttp {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            gets: Mutex::new(Vec::new()),
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn gets(&self) -> Vec<String> {
        self.gets.lock().unwrap().clone()
    }

    pub fn posts(&self) -> Vec<String> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for StubHttp {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.gets.lock().unwrap().push(path.to_string());
        Ok(serde_json::from_value(self.response.clone())?)
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.posts.lock().unwrap().push(path.to_string());
        Ok(serde_json::from_value(self.response.clone())?)
    }
}
