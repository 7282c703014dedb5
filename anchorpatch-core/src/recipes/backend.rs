//! Built-in `backend` recipe.
//!
//! Adds a persisted demo request counter to the desktop command module.

use super::BuiltinRule;

pub(super) const TARGET: &str = "src-tauri/src/lib.rs";

pub(super) const DESCRIPTION: &str =
    "Add get/increment commands for the demo request counter and register them.";

pub(super) const RULES: &[BuiltinRule] = &[
    BuiltinRule {
        name: "insert-demo-counter-commands",
        description: Some("Insert the request counter commands ahead of the entry point docs."),
        anchor: r#"/// Entry point for the Tauri application."#,
        replacement: r#"

/// Gets the current demo request count from secure local storage
#[tauri::command]
async fn get_demo_request_count(app_handle: tauri::AppHandle) -> Result<u32, String> {
    let app_dir = app_handle.path().app_data_dir().map_err(|e: tauri::Error| e.to_string())?;
    std::fs::create_dir_all(&app_dir).map_err(|e| e.to_string())?;
    
    let file_path = app_dir.join("demo_state.json");
    if !file_path.exists() {
        return Ok(0);
    }
    
    let content = std::fs::read_to_string(file_path).unwrap_or_else(|_| "0".to_string());
    let count: u32 = content.parse().unwrap_or(0);
    Ok(count)
}

/// Increments the current demo request count in secure local storage
#[tauri::command]
async fn increment_demo_request_count(app_handle: tauri::AppHandle) -> Result<u32, String> {
    let app_dir = app_handle.path().app_data_dir().map_err(|e: tauri::Error| e.to_string())?;
    std::fs::create_dir_all(&app_dir).map_err(|e| e.to_string())?;
    
    let file_path = app_dir.join("demo_state.json");
    
    let mut count: u32 = 0;
    if file_path.exists() {
        if let Ok(content) = std::fs::read_to_string(&file_path) {
            count = content.parse().unwrap_or(0);
        }
    }
    
    count += 1;
    
    std::fs::write(&file_path, count.to_string()).map_err(|e| e.to_string())?;
    
    Ok(count)
}

/// Entry point for the Tauri application.
"#,
    },
    BuiltinRule {
        name: "register-demo-counter-commands",
        description: Some("Add both counter commands to the handler list."),
        anchor: r#"        // Google OAuth commands
        auth::google::start_google_auth,
        auth::storage::logout,
        auth::storage::restore_session,
        auth::token::refresh_token,
        save_user_preferences,
        load_user_preferences,"#,
        replacement: r#"        // Google OAuth commands
        auth::google::start_google_auth,
        auth::storage::logout,
        auth::storage::restore_session,
        auth::token::refresh_token,
        save_user_preferences,
        load_user_preferences,
        get_demo_request_count,
        increment_demo_request_count,"#,
    },
];
