//! End-to-end behavior of the LogCat facade against an in-memory sink.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

use logcat::logcat::json::PARSE_ERROR_PLACEHOLDER;
use logcat::logcat::{hook_fn, LogHook, Occurrence, DEFAULT_TAG};
use logcat::{JsonOptions, Level, LogOptions};

mod common;

#[test]
fn test_disabled_logging_emits_nothing() {
    let (cat, sink) = common::recording_logcat();
    cat.set_enabled(false);

    for level in Level::ALL {
        cat.log(level, Some("message"), LogOptions::here());
        cat.log(level, Some(""), LogOptions::new().tag("T"));
    }
    cat.v("v");
    cat.d("d");
    cat.i("i");
    cat.w("w");
    cat.e("e");
    cat.wtf("wtf");
    cat.json(r#"{"a":1}"#);

    assert!(sink.is_empty());
}

#[test]
fn test_missing_message_is_noop() {
    let (cat, sink) = common::recording_logcat();
    cat.log(Level::Info, None::<&str>, LogOptions::here());
    cat.json_with(None::<&str>, JsonOptions::here());
    assert!(sink.is_empty());
}

#[test]
fn test_each_level_maps_to_sink() {
    let (cat, sink) = common::recording_logcat_untraced();
    cat.v("v");
    cat.d("d");
    cat.i("i");
    cat.w("w");
    cat.e("e");
    cat.wtf("wtf");

    let levels: Vec<Level> = sink.entries().iter().map(|e| e.level).collect();
    assert_eq!(levels, Level::ALL.to_vec());
}

#[test]
fn test_suppressing_hook_blocks_emission() {
    let (cat, sink) = common::recording_logcat();
    let hook = hook_fn(|record| {
        if record.msg.as_deref().is_some_and(|m| m.contains("password")) {
            record.suppress();
        }
    });
    cat.add_hook(hook.clone());

    cat.i("password=hunter2");
    cat.i("fine");
    assert_eq!(sink.len(), 1);

    assert!(cat.remove_hook(&hook));
    assert!(!cat.remove_hook(&hook));
    cat.i("password=again");
    assert_eq!(sink.len(), 2);
}

#[test]
fn test_noop_hook_changes_nothing() {
    let (plain, plain_sink) = common::recording_logcat_untraced();
    let (hooked, hooked_sink) = common::recording_logcat_untraced();
    hooked.add_hook(hook_fn(|_| {}));

    plain.log(Level::Warn, Some("same"), LogOptions::new().tag("Tag"));
    hooked.log(Level::Warn, Some("same"), LogOptions::new().tag("Tag"));
    assert_eq!(plain_sink.entries(), hooked_sink.entries());
}

#[test]
fn test_hooks_see_the_record_before_location_suffix() {
    let (cat, sink) = common::recording_logcat();
    let seen = Arc::new(std::sync::Mutex::new(None));
    let s = seen.clone();
    cat.add_hook(hook_fn(move |record| {
        *s.lock().unwrap() = Some((record.msg.clone(), record.tag.clone(), record.occurred));
    }));

    cat.i("hi");

    let (msg, tag, occurred) = seen.lock().unwrap().take().unwrap();
    assert_eq!(msg.as_deref(), Some("hi"));
    assert_eq!(tag, DEFAULT_TAG);
    assert_eq!(occurred.unwrap().file_name(), "facade_behavior.rs");
    assert!(sink.entries()[0].msg.starts_with("hi ...(facade_behavior.rs:"));
}

#[test]
fn test_chunk_boundaries() {
    let (cat, sink) = common::recording_logcat_untraced();

    let exact = "a".repeat(3800);
    cat.i(&exact);
    assert_eq!(sink.drain().len(), 1);

    let over = "b".repeat(3801);
    cat.i(&over);
    let chunks = sink.drain();
    assert_eq!(chunks.len(), 2);
    let joined: String = chunks.iter().map(|c| c.msg.as_str()).collect();
    assert_eq!(joined, over);

    let double = "c".repeat(7600);
    cat.i(&double);
    let chunks = sink.drain();
    assert_eq!(chunks.len(), 2);
    assert!(chunks.iter().all(|c| c.msg.len() == 3800));
}

#[test]
fn test_chunks_share_tag_level_and_error() {
    let (cat, sink) = common::recording_logcat_untraced();
    let err = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
    cat.log(
        Level::Error,
        Some("x".repeat(5000)),
        LogOptions::new().tag("Big").error(err),
    );

    let entries = sink.entries();
    assert_eq!(entries.len(), 2);
    for entry in &entries {
        assert_eq!(entry.level, Level::Error);
        assert_eq!(entry.tag, "Big");
        assert_eq!(entry.error.as_deref(), Some("disk full"));
    }
}

#[test]
fn test_location_suffix_counts_toward_chunking() {
    let (cat, sink) = common::recording_logcat();
    let occurred = Occurrence::new("src/ui/Main.kt", 7);
    cat.log(
        Level::Info,
        Some("z".repeat(3800)),
        LogOptions::new().occurred(Some(occurred)),
    );

    let entries = sink.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].msg, " ...(Main.kt:7)");
    assert_eq!(entries[0].tag, "Main");
}

#[test]
fn test_concurrent_chunked_messages_do_not_interleave() {
    let (cat, sink) = common::recording_logcat_untraced();
    let cat = Arc::new(cat);

    let handles: Vec<_> = ['x', 'y', 'z', 'w']
        .into_iter()
        .map(|ch| {
            let cat = cat.clone();
            thread::spawn(move || {
                for _ in 0..10 {
                    cat.i(ch.to_string().repeat(3800 * 3));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let entries = sink.entries();
    assert_eq!(entries.len(), 4 * 10 * 3);
    for group in entries.chunks(3) {
        let first = group[0].msg.chars().next().unwrap();
        assert!(group.iter().all(|e| e.msg.chars().all(|c| c == first)));
    }
}

#[test]
fn test_json_object_is_pretty_printed() {
    let (cat, sink) = common::recording_logcat_untraced();
    cat.json_with(Some(r#"{"a":1}"#), JsonOptions::new().msg("payload"));
    assert_eq!(sink.entries()[0].msg, "payload\n{\n  \"a\": 1\n}");
}

#[test]
fn test_json_parse_failure_uses_placeholder() {
    let (cat, sink) = common::recording_logcat_untraced();
    cat.json("{a:");
    assert_eq!(sink.entries()[0].msg, format!("\n{}", PARSE_ERROR_PLACEHOLDER));
}

#[test]
fn test_json_empty_input_has_no_body() {
    let (cat, sink) = common::recording_logcat();
    let occurred = Occurrence::new("src/Net.kt", 12);
    cat.json_with(
        Some(""),
        JsonOptions::new().msg("response").occurred(Some(occurred)),
    );
    assert_eq!(sink.entries()[0].msg, "response (Net.kt:12)\n");
}

#[test]
fn test_json_respects_level_and_tag() {
    let (cat, sink) = common::recording_logcat();
    cat.json_with(
        Some("[1,2]"),
        JsonOptions::new().level(Level::Debug).tag("Api"),
    );
    let entry = &sink.entries()[0];
    assert_eq!(entry.level, Level::Debug);
    assert_eq!(entry.tag, "Api");
    assert_eq!(entry.msg, "\n[\n  1,\n  2\n]");
}

#[test]
fn test_sentinel_tag_replaced_by_caller_file() {
    let (cat, sink) = common::recording_logcat();
    cat.w("where am I");
    assert_eq!(sink.entries()[0].tag, "facade_behavior");
}

#[test]
fn test_explicit_tag_is_not_replaced() {
    let (cat, sink) = common::recording_logcat();
    cat.log(Level::Info, Some("tagged"), LogOptions::here().tag("Network"));
    assert_eq!(sink.entries()[0].tag, "Network");
}

#[test]
fn test_hooks_can_be_shared_across_facades() {
    struct Counter(AtomicUsize);
    impl LogHook for Counter {
        fn hook(&self, _record: &mut logcat::logcat::LogRecord) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    let counter = Arc::new(Counter(AtomicUsize::new(0)));
    let hook: Arc<dyn LogHook> = counter.clone();
    let (a, _) = common::recording_logcat();
    let (b, _) = common::recording_logcat();
    a.add_hook(hook.clone());
    b.add_hook(hook.clone());
    b.add_hook(hook);

    a.i("one");
    b.i("two");
    assert_eq!(counter.0.load(Ordering::SeqCst), 3);
    assert_eq!(b.hook_count(), 2);
}
