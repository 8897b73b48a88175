use lexitra_core::{MatchScope, SubstitutionEngine};
use lexitra_dictionary::Dictionary;

/// Engine self-check: fixed cases through the real pattern compiler and
/// substitution engine, reported per case.
pub fn selfcheck() -> anyhow::Result<()> {
    let dictionary: Dictionary = [
        ("Hello World".to_string(), "你好世界".to_string()),
        ("Test String".to_string(), "测试字符串".to_string()),
    ]
    .into_iter()
    .collect();

    let quoted = SubstitutionEngine::new(&dictionary, MatchScope::Quoted);
    let anywhere = SubstitutionEngine::new(&dictionary, MatchScope::Anywhere);

    let cases: [(&str, &SubstitutionEngine, &str, &str); 5] = [
        (
            "quoted replacement",
            &quoted,
            r#"greeting = "Hello World""#,
            r#"greeting = "你好世界""#,
        ),
        (
            "whitespace-flexible match",
            &quoted,
            "msg = \"Hello   World\"",
            "msg = \"你好世界\"",
        ),
        (
            "case-insensitive match",
            &quoted,
            r#"msg = "HELLO WORLD""#,
            r#"msg = "你好世界""#,
        ),
        (
            "unquoted text left alone",
            &quoted,
            "Hello World!",
            "Hello World!",
        ),
        (
            "anywhere replacement",
            &anywhere,
            "Hello World! This is a Test String.",
            "你好世界! This is a 测试字符串.",
        ),
    ];

    let mut failed = 0;
    for (name, engine, input, expected) in cases {
        let (actual, _) = engine.apply(input);
        if actual == expected {
            tracing::info!("ok: {name}");
        } else {
            failed += 1;
            tracing::error!("failed: {name}: expected '{expected}', got '{actual}'");
        }
    }

    anyhow::ensure!(failed == 0, "{failed} self-check case(s) failed");
    tracing::info!("self-check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selfcheck_passes() {
        selfcheck().unwrap();
    }
}
