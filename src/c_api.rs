// C entry points for hosts that embed the demo. Every string crossing the
// boundary is UTF-8; every returned string must be released with
// `demo_free_string`.
use crate::config::DemoConfig;
use crate::persistence::load_corpus_or_builtin;
use crate::DemoEngine;
use serde_json::json;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::sync::{Mutex, OnceLock};
use tracing::{error, info};

static ENGINE: OnceLock<Mutex<DemoEngine>> = OnceLock::new();

fn build_engine() -> DemoEngine {
    let config = DemoConfig::load().unwrap_or_else(|e| {
        error!("bad configuration, using defaults: {e}");
        DemoConfig::default()
    });
    let corpus = load_corpus_or_builtin(config.corpus_snapshot.as_deref()).unwrap_or_else(|e| {
        error!("could not load corpus snapshot, using built-in corpus: {e}");
        crate::Corpus::builtin()
    });
    DemoEngine::new(corpus)
}

fn engine() -> &'static Mutex<DemoEngine> {
    ENGINE.get_or_init(|| Mutex::new(build_engine()))
}

unsafe fn read_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    CStr::from_ptr(s).to_str().ok()
}

fn into_c_string(json: String) -> *mut c_char {
    CString::new(json).map_or(ptr::null_mut(), CString::into_raw)
}

fn error_json(message: impl std::fmt::Display) -> String {
    json!({ "error": message.to_string() }).to_string()
}

#[no_mangle]
pub extern "C" fn demo_engine_init() {
    let result = catch_unwind(|| {
        let engine = engine();
        if let Ok(engine) = engine.lock() {
            info!(vocabulary = engine.vocabulary().len(), "demo engine initialized");
        }
    });
    if result.is_err() {
        eprintln!("[demo FATAL] panic during engine initialization");
    }
}

/// Classifies `text` with `category` as the truth. Returns
/// `{"trace": ..., "steps": [...]}` or `{"error": "..."}`.
///
/// # Safety
/// Both arguments must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn demo_classify(text: *const c_char, category: *const c_char) -> *mut c_char {
    let (Some(text), Some(category)) = (read_str(text), read_str(category)) else {
        return into_c_string(error_json("arguments must be valid UTF-8 strings"));
    };
    let result = catch_unwind(AssertUnwindSafe(|| {
        let engine = match engine().lock() {
            Ok(engine) => engine,
            Err(_) => return error_json("engine lock poisoned"),
        };
        match engine.classify(text, category) {
            Ok(trace) => json!({ "trace": &trace, "steps": engine.steps(&trace) }).to_string(),
            Err(e) => error_json(e),
        }
    }));
    into_c_string(result.unwrap_or_else(|_| error_json("panic in demo_classify")))
}

/// Appends a sample to a category. Returns `false` on any failure.
///
/// # Safety
/// Both arguments must be null or valid NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn demo_add_sample(category: *const c_char, text: *const c_char) -> bool {
    let (Some(category), Some(text)) = (read_str(category), read_str(text)) else {
        return false;
    };
    catch_unwind(AssertUnwindSafe(|| match engine().lock() {
        Ok(mut engine) => engine.corpus_mut().add_sample(category, text).is_ok(),
        Err(_) => false,
    }))
    .unwrap_or(false)
}

/// # Safety
/// `s` must come from this library and not have been freed already.
#[no_mangle]
pub unsafe extern "C" fn demo_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
