//! Run with
//!
//! ```not_rust
//! cargo run --example load --features="http"
//! ```
//!

use anyhow::Context;
use composable_blocking_chain::{
    chain::ChainBuilder,
    context::{BlockingContext, SerialContext},
    operation::{HttpGet, NetworkError},
};
use reqwest::Client;
use serde::Deserialize;
use tokio::runtime::Runtime;

#[path = "../util/util.rs"]
mod util;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Todo {
    user_id: u32,
    title: String,
}

#[derive(Debug, Deserialize)]
struct User {
    id: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct Post {
    id: u32,
    title: String,
}

// Not async: the main thread plays the UI loop and has to be free to block.
fn main() -> anyhow::Result<()> {
    util::init("load")?;

    let base_url = util::env_or("BASE_URL", "https://jsonplaceholder.typicode.com");
    let todo_id = util::env_or("TODO_ID", "1");

    tracing::info!(%base_url, %todo_id);

    let runtime = Runtime::new().context("Failed to build runtime")?;
    let client = Client::new();
    let (completion, mut main_loop) = SerialContext::new();

    let chain = ChainBuilder::new({
        let (base_url, client, handle) =
            (base_url.clone(), client.clone(), runtime.handle().clone());

        move |todo_id: String| {
            HttpGet::new(
                &format!("{base_url}/todos/{todo_id}"),
                client.clone(),
                handle.clone(),
            )
            .map(HttpGet::json::<Todo>)
        }
    })
    .then({
        let (base_url, client, handle) =
            (base_url.clone(), client.clone(), runtime.handle().clone());

        move |todo: Todo| {
            tracing::info!(title = %todo.title, "Loaded todo");

            HttpGet::new(
                &format!("{base_url}/users/{}", todo.user_id),
                client.clone(),
                handle.clone(),
            )
            .map(HttpGet::json::<User>)
        }
    })
    .then({
        let handle = runtime.handle().clone();

        move |user: User| {
            tracing::info!(name = %user.name, "Loaded user");

            HttpGet::new(
                &format!("{base_url}/posts?userId={}", user.id),
                client.clone(),
                handle.clone(),
            )
            .map(HttpGet::json::<Vec<Post>>)
        }
    })
    .name("load")
    .build(BlockingContext::new(runtime.handle().clone()), completion);

    chain.run(todo_id, |result: Result<Vec<Post>, NetworkError>| match result {
        Ok(posts) => {
            for post in posts {
                tracing::info!(id = post.id, title = %post.title, "Post");
            }
        }
        Err(err) => tracing::error!(%err, "Failed to load posts"),
    });

    // The loop returns once no context can deliver to it, even if the worker unwound.
    drop(chain);
    main_loop.run();

    Ok(())
}
