use moon::*;
use shared::{DashboardConfig, DownMsg, UpMsg};
use std::fs;

// ===== CENTRALIZED DEBUG FLAGS =====
const DEBUG_BACKEND: bool = false; // Backend request/response debugging

// Debug macro for easy toggling
macro_rules! debug_log {
    ($flag:expr, $($arg:tt)*) => {
        if $flag {
            println!($($arg)*);
        }
    };
}

const CONFIG_FILE_PATH: &str = ".presence_dashboard";

async fn frontend() -> Frontend {
    Frontend::new()
        .title("Presence Dashboard")
        .index_by_robots(false)
}

async fn up_msg_handler(req: UpMsgRequest<UpMsg>) {
    let (session_id, cor_id) = (req.session_id, req.cor_id);

    debug_log!(
        DEBUG_BACKEND,
        "Received request type: {:?}",
        std::mem::discriminant(&req.up_msg)
    );

    match &req.up_msg {
        UpMsg::LoadConfig => {
            load_config(session_id, cor_id).await;
        }
        UpMsg::SaveConfig(config) => {
            save_config(config.clone(), session_id, cor_id).await;
        }
    }
}

async fn load_config(session_id: SessionId, cor_id: CorId) {
    let config = match fs::read_to_string(CONFIG_FILE_PATH) {
        Ok(content) => match toml::from_str::<DashboardConfig>(&content) {
            Ok(mut config) => {
                let warnings = config.validate_and_fix();
                if !warnings.is_empty() {
                    for warning in &warnings {
                        println!("Config normalized: {}", warning);
                    }
                    // Persist the normalized values so the warnings are one-time
                    if let Err(error) = save_config_to_file(&config) {
                        eprintln!("Failed to persist normalized config: {}", error);
                    }
                }
                config
            }
            Err(error) => {
                send_down_msg(
                    DownMsg::ConfigError(format!("Failed to parse config: {}", error)),
                    session_id,
                    cor_id,
                )
                .await;
                return;
            }
        },
        Err(_) => {
            // Config file not found - create default
            let default_config = DashboardConfig::default();
            if let Err(error) = save_config_to_file(&default_config) {
                send_down_msg(
                    DownMsg::ConfigError(format!("Failed to create default config: {}", error)),
                    session_id,
                    cor_id,
                )
                .await;
                return;
            }
            default_config
        }
    };

    send_down_msg(DownMsg::ConfigLoaded(config), session_id, cor_id).await;
}

async fn save_config(config: DashboardConfig, session_id: SessionId, cor_id: CorId) {
    match save_config_to_file(&config) {
        Ok(()) => {
            send_down_msg(DownMsg::ConfigSaved, session_id, cor_id).await;
        }
        Err(error) => {
            send_down_msg(
                DownMsg::ConfigError(format!("Failed to save config: {}", error)),
                session_id,
                cor_id,
            )
            .await;
        }
    }
}

fn save_config_to_file(config: &DashboardConfig) -> Result<(), Box<dyn std::error::Error>> {
    let toml_content = toml::to_string_pretty(config)?;

    let content_with_header = format!(
        "# Presence Dashboard User Configuration\n\
         # This file stores your theme preference and the aggregate API origin\n\
         \n\
         {}",
        toml_content
    );

    fs::write(CONFIG_FILE_PATH, content_with_header)?;
    Ok(())
}

async fn send_down_msg(msg: DownMsg, session_id: SessionId, cor_id: CorId) {
    if let Some(session) = sessions::by_session_id().wait_for(session_id).await {
        session.send_down_msg(&msg, cor_id).await;
    } else {
        debug_log!(DEBUG_BACKEND, "Session {:?} not found", session_id);
    }
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    start(frontend, up_msg_handler, |_error| {}).await
}
