//! Configuration loading and engine construction.

mod common;

use common::create_temp_file;
use scatha::{
    Architecture, DecodeOptions, DisassemblerConfig, Engine, ErrorPolicy, Mode, ScathaError,
};

#[test]
fn test_config_from_file() {
    let json = br#"{
        "architecture": "x86",
        "mode": "MODE_32",
        "options": { "detail": false, "max_instructions": 2 }
    }"#;
    let file = create_temp_file(json);
    let config = DisassemblerConfig::from_path(file.path()).unwrap();
    assert_eq!(config.architecture, Architecture::X86);
    assert_eq!(config.mode, Mode::MODE_32);
    assert!(!config.options.detail);
    assert_eq!(config.options.on_error, ErrorPolicy::Stop);

    let engine = Engine::from_config(&config).unwrap();
    let out = engine.disasm_all(&[0x55, 0x89, 0xe5, 0xc3], 0);
    assert_eq!(out.instruction_count(), 2);
    assert_eq!(out.consumed, 3);
    // detail off: no groups or implicit registers
    let push = out.instructions().next().unwrap();
    assert!(push.groups.is_empty());
    assert!(push.regs_read.is_empty());
}

#[test]
fn test_missing_file() {
    let err = DisassemblerConfig::from_path("/nonexistent/scatha.json").unwrap_err();
    assert!(matches!(err, ScathaError::Io(_)));
}

#[test]
fn test_unsupported_mode_rejected_at_engine() {
    let config = DisassemblerConfig::from_json_str(
        r#"{ "architecture": "mips", "mode": "MIPS32 | MICRO" }"#,
    )
    .unwrap();
    let err = Engine::from_config(&config).unwrap_err();
    assert!(matches!(err, ScathaError::UnsupportedMode { .. }));

    let config = DisassemblerConfig::new(Architecture::X86, Mode::MODE_32 | Mode::MODE_64);
    assert!(Engine::from_config(&config).is_err());
}

#[test]
fn test_skip_policy_from_json() {
    let config = DisassemblerConfig::from_json_str(
        r#"{
            "architecture": "x86",
            "mode": "MODE_64",
            "options": { "on_error": "skip_byte", "skip_data_mnemonic": "db" }
        }"#,
    )
    .unwrap();
    let engine = Engine::from_config(&config).unwrap();
    let out = engine.disasm_all(&[0xd6, 0x90], 0x10);
    assert!(out.error.is_none());
    assert_eq!(
        out.lines(),
        vec![
            format!("{:08x}: {:<24}db 0xd6", 0x10, "d6"),
            format!("{:08x}: {:<24}nop", 0x11, "90"),
        ]
    );
}

#[test]
fn test_saved_config_reloads() {
    let config = DisassemblerConfig::new(Architecture::Mips, Mode::MIPS64 | Mode::BIG_ENDIAN)
        .with_options(DecodeOptions {
            on_error: ErrorPolicy::SkipByte,
            ..Default::default()
        });
    let file = create_temp_file(config.to_json().unwrap().as_bytes());
    let loaded = DisassemblerConfig::from_path(file.path()).unwrap();
    assert_eq!(loaded, config);
    let engine = Engine::from_config(&loaded).unwrap();
    assert_eq!(engine.mode(), Mode::MIPS64 | Mode::BIG_ENDIAN);
}

#[test]
fn test_empty_skip_mnemonic_rejected() {
    let config = DisassemblerConfig::default().with_options(DecodeOptions {
        skip_data_mnemonic: "  ".to_string(),
        ..Default::default()
    });
    let err = Engine::from_config(&config).unwrap_err();
    assert!(matches!(err, ScathaError::InvalidInput(_)));
}
