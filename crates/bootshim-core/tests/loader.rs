use std::time::Duration;

use bootshim_core::{
    BootConfig, BootOutcome, ConfigError, FailureReason, Loader, NoticeStyle, SurfaceError,
    WhiteSpace,
};
use bootshim_test_support::module::ScriptedModule;
use bootshim_test_support::slot::SharedSlot;
use bootshim_test_support::surface::{Node, RecordingSurface};

fn notice_texts(surface: &RecordingSurface) -> Vec<String> {
    surface
        .notices()
        .into_iter()
        .map(|notice| notice.text().to_string())
        .collect()
}

#[tokio::test]
async fn rejected_load_renders_reason_without_slot() -> anyhow::Result<()> {
    let mut surface = RecordingSurface::new();
    let module = ScriptedModule::rejecting("network down");
    let loader = Loader::new(
        BootConfig::default(),
        module.clone(),
        &mut surface,
        None::<String>,
    )?;

    let outcome = loader.run().await?;

    assert!(matches!(outcome, BootOutcome::Failed(_)));
    assert_eq!(notice_texts(&surface), vec!["Error:\nnetwork down"]);
    assert_eq!(module.requests(), vec!["./index.js"]);
    Ok(())
}

#[tokio::test]
async fn preset_slot_overrides_unrelated_reason() -> anyhow::Result<()> {
    let mut surface = RecordingSurface::new();
    let slot = SharedSlot::with_value("custom boot failure");
    let module = ScriptedModule::rejecting(FailureReason::opaque("[object Object]"));

    Loader::new(BootConfig::default(), module, &mut surface, slot)?
        .run()
        .await?;

    assert_eq!(notice_texts(&surface), vec!["Error:\ncustom boot failure"]);
    Ok(())
}

#[tokio::test]
async fn slot_published_during_load_is_honoured() -> anyhow::Result<()> {
    let mut surface = RecordingSurface::new();
    let slot = SharedSlot::new();
    let module = ScriptedModule::rejecting(FailureReason::error("RuntimeError", "unreachable"))
        .publishing(&slot, "panicked at src/lib.rs:42:9:\nindex out of bounds");

    Loader::new(BootConfig::default(), module, &mut surface, slot.clone())?
        .run()
        .await?;

    assert_eq!(
        notice_texts(&surface),
        vec!["Error:\npanicked at src/lib.rs:42:9:\nindex out of bounds"]
    );
    Ok(())
}

#[tokio::test]
async fn error_like_reason_uses_name_and_message() -> anyhow::Result<()> {
    let mut surface = RecordingSurface::new();
    let module = ScriptedModule::rejecting(FailureReason::error(
        "TypeError",
        "error loading dynamically imported module",
    ));

    Loader::new(BootConfig::default(), module, &mut surface, None::<String>)?
        .run()
        .await?;

    assert_eq!(
        notice_texts(&surface),
        vec!["Error:\nTypeError: error loading dynamically imported module"]
    );
    Ok(())
}

#[tokio::test]
async fn failure_leaves_exactly_one_notice() -> anyhow::Result<()> {
    let prior: [&[&str]; 3] = [
        &[],
        &["<canvas>"],
        &["<h1>Game</h1>", "<canvas>", "<p>50%</p>"],
    ];
    for children in prior {
        let mut surface = RecordingSurface::with_markup(children.iter().copied());
        Loader::new(
            BootConfig::default(),
            ScriptedModule::rejecting("boom"),
            &mut surface,
            None::<String>,
        )?
        .run()
        .await?;

        assert_eq!(surface.children().len(), 1);
        assert!(matches!(surface.children()[0], Node::Notice(_)));
        assert_eq!(surface.clear_calls(), 1);
        assert_eq!(surface.append_calls(), 1);
    }
    Ok(())
}

#[tokio::test]
async fn whitespace_in_reason_is_preserved() -> anyhow::Result<()> {
    let mut surface = RecordingSurface::new();
    let reason = "  leading\n\ttabbed <b>not markup</b>\ntrailing  ";

    let outcome = Loader::new(
        BootConfig::default(),
        ScriptedModule::rejecting(reason),
        &mut surface,
        None::<String>,
    )?
    .run()
    .await?;

    let BootOutcome::Failed(notice) = outcome else {
        anyhow::bail!("expected failure outcome");
    };
    assert_eq!(notice.text(), format!("Error:\n{reason}"));
    assert_eq!(notice.style().white_space, WhiteSpace::Pre);
    assert_eq!(notice.style().color, "red");
    assert_eq!(notice_texts(&surface), vec![format!("Error:\n{reason}")]);
    Ok(())
}

#[tokio::test]
async fn successful_load_leaves_surface_untouched() -> anyhow::Result<()> {
    let mut surface = RecordingSurface::with_markup(["<canvas>"]);
    let slot = SharedSlot::with_value("stale message");

    let outcome = Loader::new(
        BootConfig::default(),
        ScriptedModule::resolving(),
        &mut surface,
        slot,
    )?
    .run()
    .await?;

    assert_eq!(outcome, BootOutcome::Loaded);
    assert!(surface.is_untouched());
    assert_eq!(surface.children(), &[Node::Markup("<canvas>".to_string())]);
    Ok(())
}

#[tokio::test]
async fn pending_load_never_touches_surface() -> anyhow::Result<()> {
    let mut surface = RecordingSurface::with_markup(["<p>loading</p>"]);
    let loader = Loader::new(
        BootConfig::default(),
        ScriptedModule::pending(),
        &mut surface,
        None::<String>,
    )?;

    let settled = tokio::time::timeout(Duration::from_millis(25), loader.run()).await;

    assert!(settled.is_err());
    assert!(surface.is_untouched());
    assert_eq!(surface.children().len(), 1);
    Ok(())
}

#[tokio::test]
async fn surface_failure_is_returned_to_caller() -> anyhow::Result<()> {
    for operation in ["clear", "append_notice"] {
        let mut surface = RecordingSurface::failing_on(operation);
        let result = Loader::new(
            BootConfig::default(),
            ScriptedModule::rejecting("boom"),
            &mut surface,
            None::<String>,
        )?
        .run()
        .await;

        match result {
            Err(SurfaceError::Operation { operation: op, .. }) => assert_eq!(op, operation),
            other => anyhow::bail!("expected surface failure for {operation}, got {other:?}"),
        }
        assert!(surface.notices().is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn configured_module_and_presentation_are_used() -> anyhow::Result<()> {
    let config = BootConfig {
        module_path: "../pkg/game.js".to_string(),
        heading: "Boot failed:".to_string(),
        style: NoticeStyle {
            color: "#ff5555".to_string(),
            white_space: WhiteSpace::PreWrap,
        },
        ..BootConfig::default()
    };
    let mut surface = RecordingSurface::new();
    let module = ScriptedModule::rejecting("missing export");

    let loader = Loader::new(config, module.clone(), &mut surface, None::<String>)?;
    assert_eq!(loader.specifier().as_str(), "../pkg/game.js");
    loader.run().await?;

    assert_eq!(module.requests(), vec!["../pkg/game.js"]);
    let notices = surface.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].text(), "Boot failed:\nmissing export");
    assert_eq!(
        notices[0].style().css_text(),
        "color: #ff5555; white-space: pre-wrap;"
    );
    Ok(())
}

#[test]
fn invalid_config_is_rejected_before_loading() {
    let module = ScriptedModule::resolving();
    let config = BootConfig {
        module_path: "index.js".to_string(),
        ..BootConfig::default()
    };

    let result = Loader::new(
        config,
        module.clone(),
        RecordingSurface::new(),
        None::<String>,
    );

    assert!(matches!(
        result,
        Err(ConfigError::InvalidField {
            field: "module_path",
            ..
        })
    ));
    assert!(module.requests().is_empty());
}
