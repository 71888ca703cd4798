//! Build script for lumen-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates board.toml and compiles it into `board_config.rs`

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

fn main() {
    setup_linker();
    let board = load_board_config();
    write_board_config(&board);
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    // Re-run if memory.x changes
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Values read from board.toml
struct Board {
    debounce_ms: u32,
    timeout_ms: u32,
    active_high: bool,
    duty_min: u8,
    duty_max: u8,
    duty_step: u8,
    on_time_ms: u32,
    off_time_ms: u32,
    step_interval_ms: u32,
}

/// Parse and validate board.toml
fn load_board_config() -> Board {
    println!("cargo:rerun-if-changed=board.toml");

    let config_path = Path::new("board.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: board.toml not found!                                    ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a board.toml configuration file.          ║\n\
            ║  Please create one in the lumen-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read board.toml                                ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in board.toml                        ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let debounce_ms = read_int(&config, "buttons", "debounce_ms", 1, u32::MAX as i64, &mut errors);
    let timeout_ms = read_int(&config, "inactivity", "timeout_ms", 1, u32::MAX as i64, &mut errors);
    let active_high = read_bool(&config, "leds", "active_high", &mut errors);
    let duty_min = read_int(&config, "fade", "duty_min", 0, 255, &mut errors);
    let duty_max = read_int(&config, "fade", "duty_max", 0, 255, &mut errors);
    let duty_step = read_int(&config, "fade", "duty_step", 1, 255, &mut errors);
    let on_time_ms = read_int(&config, "fade", "on_time_ms", 0, u32::MAX as i64, &mut errors);
    let off_time_ms = read_int(&config, "fade", "off_time_ms", 0, u32::MAX as i64, &mut errors);
    let step_interval_ms =
        read_int(&config, "fade", "step_interval_ms", 1, u32::MAX as i64, &mut errors);

    if duty_min >= duty_max && errors.is_empty() {
        errors.push("[fade] duty_min must be below duty_max".to_string());
    }

    fail_on_errors("Invalid board configuration", &errors);

    println!("cargo:warning=board.toml validated successfully");

    Board {
        debounce_ms: debounce_ms as u32,
        timeout_ms: timeout_ms as u32,
        active_high,
        duty_min: duty_min as u8,
        duty_max: duty_max as u8,
        duty_step: duty_step as u8,
        on_time_ms: on_time_ms as u32,
        off_time_ms: off_time_ms as u32,
        step_interval_ms: step_interval_ms as u32,
    }
}

/// Read an integer `[section] key`, checking it lies in `min..=max`
fn read_int(
    config: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) -> i64 {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Integer(value)) => {
            if *value < min || *value > max {
                errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
            }
            *value
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            0
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            0
        }
    }
}

/// Read a boolean `[section] key`
fn read_bool(config: &toml::Value, section: &str, key: &str, errors: &mut Vec<String>) -> bool {
    match config.get(section).and_then(|s| s.get(key)) {
        Some(toml::Value::Boolean(value)) => *value,
        Some(_) => {
            errors.push(format!("[{}] {} must be true or false", section, key));
            false
        }
        None => {
            errors.push(format!("[{}] missing '{}'", section, key));
            false
        }
    }
}

/// Abort the build with a boxed list of errors
fn fail_on_errors(title: &str, errors: &[String]) {
    if errors.is_empty() {
        return;
    }
    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title,
        errors
            .iter()
            .map(|e| format!("║  • {:<62} ║", e))
            .collect::<Vec<_>>()
            .join("\n")
    );
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Emit the validated configuration as a `BoardConfig` constant
fn write_board_config(board: &Board) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let code = format!(
        "/// Board configuration compiled from board.toml\n\
         pub const BOARD: BoardConfig = BoardConfig {{\n\
         \x20   debounce_ms: {},\n\
         \x20   inactivity_timeout_ms: {},\n\
         \x20   leds_active_high: {},\n\
         \x20   fade: FadeConfig {{\n\
         \x20       duty_min: {},\n\
         \x20       duty_max: {},\n\
         \x20       duty_step: {},\n\
         \x20       on_time_ms: {},\n\
         \x20       off_time_ms: {},\n\
         \x20       step_interval_ms: {},\n\
         \x20   }},\n\
         }};\n",
        board.debounce_ms,
        board.timeout_ms,
        board.active_high,
        board.duty_min,
        board.duty_max,
        board.duty_step,
        board.on_time_ms,
        board.off_time_ms,
        board.step_interval_ms,
    );
    fs::write(out_dir.join("board_config.rs"), code).unwrap();
}
