// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export commonly used handler functions for convenience
pub use handlers::{
    fetch_page,
    render_links,
    resolve_output_path,
    save_output,
    LinkFormat,
};
