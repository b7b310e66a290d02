//! Server configuration
//!
//! Every setting can come from a command-line flag or an environment
//! variable; `.env` is loaded before parsing.

use chess_engine::constants::{DEFAULT_BRAIN_FILE, LOSS_REWARD, WIN_REWARD};
use chess_engine::{AgentConfig, RewardConfig, Side};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "backend", about = "Learned chess move server")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "QCHESS_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Snapshot file for the learned value table
    #[arg(long, env = "QCHESS_BRAIN_FILE", default_value = DEFAULT_BRAIN_FILE)]
    pub brain_file: PathBuf,

    /// Directory served for GET requests
    #[arg(long, env = "QCHESS_STATIC_DIR", default_value = "./static")]
    pub static_dir: PathBuf,

    /// Side the server plays and learns for
    #[arg(long, env = "QCHESS_TRACKED_SIDE", default_value = "black")]
    pub tracked_side: Side,

    /// Reward for every move of a won game
    #[arg(
        long,
        env = "QCHESS_WIN_REWARD",
        default_value_t = WIN_REWARD,
        allow_negative_numbers = true,
        value_parser = parse_reward
    )]
    pub win_reward: f64,

    /// Reward for every move of a lost game
    #[arg(
        long,
        env = "QCHESS_LOSS_REWARD",
        default_value_t = LOSS_REWARD,
        allow_negative_numbers = true,
        value_parser = parse_reward
    )]
    pub loss_reward: f64,

    /// Reward for every move of a drawn game (defaults to the loss reward)
    #[arg(
        long,
        env = "QCHESS_DRAW_REWARD",
        allow_negative_numbers = true,
        value_parser = parse_reward
    )]
    pub draw_reward: Option<f64>,
}

/// Rewards must be finite; NaN or infinity would not survive a snapshot
fn parse_reward(raw: &str) -> Result<f64, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| format!("invalid reward {raw:?}: {e}"))?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("reward must be a finite number, got {raw:?}"))
    }
}

impl ServerConfig {
    pub fn agent_config(&self) -> AgentConfig {
        AgentConfig {
            tracked_side: self.tracked_side,
            rewards: RewardConfig {
                win: self.win_reward,
                loss: self.loss_reward,
                draw: self.draw_reward.unwrap_or(self.loss_reward),
            },
            brain_file: self.brain_file.clone(),
        }
    }
}
