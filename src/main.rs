use axum::{
    Router,
    extract::Extension,
    routing::{get, put},
};
use std::net::SocketAddr;
use std::sync::Arc;
use todo_service::api::handlers::{
    handle_client_script, handle_create_todo, handle_delete_todo, handle_index, handle_list_todos,
    handle_update_todo,
};
use todo_service::store::file::FileStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut port: Option<u16> = None;
    let mut file_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" => {
                port = Some(args[i + 1].parse()?);
                i += 2;
            }
            "--file" => {
                file_path = Some(args[i + 1].clone());
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    let port = match port {
        Some(port) => port,
        None => std::env::var("PORT")
            .ok()
            .map(|value| value.parse())
            .transpose()?
            .unwrap_or(8000),
    };

    let file_path = file_path
        .or_else(|| std::env::var("TODOS_FILE").ok())
        .unwrap_or_else(|| "todos.json".to_string());

    let store = Arc::new(FileStore::new(&file_path));

    let app = Router::new()
        .route("/", get(handle_index))
        .route("/scripts.js", get(handle_client_script))
        .route("/todos", get(handle_list_todos).post(handle_create_todo))
        .route(
            "/todos/:id",
            put(handle_update_todo).delete(handle_delete_todo),
        )
        .layer(Extension(store));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Todo storage file: {}", file_path);
    tracing::info!("Server is running on port {}", port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
