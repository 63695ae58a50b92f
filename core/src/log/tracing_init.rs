// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Convenience methods to set up [`tracing_subscriber`] so that the `debug` events this
//! crate emits (see [`crate::DEBUG_STRICT_MOD`]) are displayed somewhere.
//!
//! 1. Global default subscriber, which once set, can't be unset or changed. This is great
//!    for apps. See [`try_initialize_logging_global`].
//! 2. Thread local subscriber, which you can assign differently to different threads.
//!    This is great for tests. See [`try_initialize_logging_thread_local`].

use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, WriterConfig};

/// Avoid gnarly type annotations by using a macro to create the `fmt` layer.
#[macro_export]
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(false)
    };
}

/// Type alias for a boxed layer.
pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Set the global default subscriber. Fails if one is already set.
pub fn try_initialize_logging_global(tracing_config: TracingConfig) -> miette::Result<()> {
    let layers = try_create_layers(tracing_config)?;
    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|error| miette::miette!("Could not set global subscriber: {error}"))
}

/// Set a thread local subscriber. Drop the returned guard to reset the tracing system to
/// its previous state for this thread.
pub fn try_initialize_logging_thread_local(
    tracing_config: TracingConfig,
) -> miette::Result<dispatcher::DefaultGuard> {
    let layers = try_create_layers(tracing_config)?;
    Ok(tracing_subscriber::registry().with(layers).set_default())
}

/// Returns the layers. This does not initialize the tracing system.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<tracing_subscriber::Registry>>>> {
    let mut return_it: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![];

    // Set the level filter from the tracing configuration. This is needed if you add more
    // layers which don't have a level filter.
    return_it.push(Box::new(tracing_config.get_level_filter()));

    if let Some(layer) = try_create_display_layer(
        tracing_config.get_level_filter(),
        tracing_config.get_writer_config(),
    )? {
        return_it.push(layer);
    }

    Ok(return_it)
}

/// This erases the concrete type of the writer, and returns a boxed layer.
///
/// This is useful for composition of layers. There's more info in the docs
/// [here](https://docs.rs/tracing-subscriber/latest/tracing_subscriber/layer/index.html#runtime-configuration-with-layers).
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    // Shared configuration regardless of where logs are output to.
    let fmt_layer = create_fmt!();

    Ok(match writer_config {
        WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
            DisplayPreference::TestWriter => Some(Box::new(
                fmt_layer.with_test_writer().with_filter(level_filter),
            )),
            DisplayPreference::Capture(capture) => {
                let tracing_writer = move || -> Box<dyn std::io::Write> {
                    Box::new(capture.clone())
                };
                Some(Box::new(
                    fmt_layer
                        .with_writer(tracing_writer)
                        .with_filter(level_filter),
                ))
            }
        },
        WriterConfig::None => None,
    })
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::{BoundedString, LogCapture};

    #[test]
    fn test_try_create_display_layer() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(
                LevelFilter::DEBUG,
                WriterConfig::Display(DisplayPreference::Stdout),
            )
            .unwrap();
        assert!(layer.is_some());
    }

    #[test]
    fn test_no_display_layer_for_writer_none() {
        let layer: Option<Box<DynLayer<tracing_subscriber::Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, WriterConfig::None).unwrap();
        assert!(layer.is_none());

        let layers = try_create_layers(TracingConfig {
            writer_config: WriterConfig::None,
            level: tracing::Level::DEBUG,
        })
        .unwrap();
        assert_eq!(layers.len(), 1);
    }

    #[serial]
    #[test]
    fn test_truncating_push_is_logged() {
        let capture = LogCapture::new();
        let guard = try_initialize_logging_thread_local(TracingConfig::new_display(
            DisplayPreference::Capture(capture.clone()),
        ))
        .unwrap();

        let mut text = BoundedString::try_new("abc", Some(4)).unwrap();
        text.push("xyz");
        drop(guard);

        assert_eq!(text.as_str(), "abcx");
        assert!(capture.contents().contains("truncated"));
    }

    #[serial]
    #[test]
    fn test_level_filter_suppresses_debug() {
        let capture = LogCapture::new();
        let guard = try_initialize_logging_thread_local(
            TracingConfig::new_display(DisplayPreference::Capture(capture.clone()))
                .with_level(tracing::Level::WARN),
        )
        .unwrap();

        let mut text = BoundedString::try_new("abc", Some(4)).unwrap();
        text.push("xyz");
        drop(guard);

        assert!(capture.contents().is_empty());
    }
}
