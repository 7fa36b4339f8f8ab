use configparser::ini::Ini;
use log::{info, warn};
use once_cell::sync::Lazy;
use std::fs;
use std::path::Path;
use std::sync::Mutex;

const SETTINGS_DIR: &str = "save";
const SETTINGS_INI_PATH: &str = "save/settings.ini";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Keyboard,
    Camera,
}

/// Player-tunable settings, persisted in an ini file.
#[derive(Debug, Clone)]
pub struct Settings {
    pub player_name: String,
    /// 1..=3; maps to a block height via `config::block_height_for_level`.
    pub difficulty_level: u8,
    pub color_index: usize,
    pub input_mode: InputMode,
    pub camera_inverted: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            player_name: "Player".to_string(),
            difficulty_level: 1,
            color_index: 0,
            input_mode: InputMode::Keyboard,
            camera_inverted: false,
        }
    }
}

static SETTINGS: Lazy<Mutex<Settings>> = Lazy::new(|| Mutex::new(Settings::default()));

fn create_default_file() -> Result<(), std::io::Error> {
    info!("Settings file not found, creating defaults in '{}'.", SETTINGS_DIR);
    fs::create_dir_all(SETTINGS_DIR)?;

    let defaults = Settings::default();
    let mut conf = Ini::new();
    conf.set("player", "Name", Some(defaults.player_name));
    conf.set("gameplay", "DifficultyLevel", Some(defaults.difficulty_level.to_string()));
    conf.set("gameplay", "ColorIndex", Some(defaults.color_index.to_string()));
    conf.set("input", "Mode", Some("keyboard".to_string()));
    conf.set("input", "CameraInverted", Some("0".to_string()));
    conf.write(SETTINGS_INI_PATH)?;
    Ok(())
}

pub fn load() {
    if !Path::new(SETTINGS_INI_PATH).exists() {
        if let Err(e) = create_default_file() {
            warn!("Failed to create default settings file: {}", e);
            return;
        }
    }

    let mut conf = Ini::new();
    if conf.load(SETTINGS_INI_PATH).is_err() {
        warn!("Failed to load '{}', using default settings.", SETTINGS_INI_PATH);
        return;
    }

    let defaults = Settings::default();
    let mut settings = SETTINGS.lock().unwrap();
    settings.player_name = conf
        .get("player", "Name")
        .filter(|name| !name.trim().is_empty())
        .unwrap_or(defaults.player_name);
    settings.difficulty_level = conf
        .get("gameplay", "DifficultyLevel")
        .and_then(|v| v.parse::<u8>().ok())
        .filter(|level| (1..=3).contains(level))
        .unwrap_or(defaults.difficulty_level);
    settings.color_index = conf
        .get("gameplay", "ColorIndex")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(defaults.color_index);
    settings.input_mode = match conf.get("input", "Mode").as_deref() {
        Some("camera") => InputMode::Camera,
        _ => InputMode::Keyboard,
    };
    settings.camera_inverted = conf
        .get("input", "CameraInverted")
        .and_then(|v| v.parse::<u8>().ok())
        .map_or(defaults.camera_inverted, |v| v != 0);
}

/// Returns a copy of the currently loaded settings.
pub fn get() -> Settings {
    SETTINGS.lock().unwrap().clone()
}

pub fn set(settings: Settings) {
    *SETTINGS.lock().unwrap() = settings;
}

pub fn save(settings: &Settings) -> Result<(), std::io::Error> {
    fs::create_dir_all(SETTINGS_DIR)?;
    let mut conf = Ini::new();
    conf.set("player", "Name", Some(settings.player_name.clone()));
    conf.set("gameplay", "DifficultyLevel", Some(settings.difficulty_level.to_string()));
    conf.set("gameplay", "ColorIndex", Some(settings.color_index.to_string()));
    let mode = match settings.input_mode {
        InputMode::Keyboard => "keyboard",
        InputMode::Camera => "camera",
    };
    conf.set("input", "Mode", Some(mode.to_string()));
    conf.set(
        "input",
        "CameraInverted",
        Some(u8::from(settings.camera_inverted).to_string()),
    );
    conf.write(SETTINGS_INI_PATH)
}
