fn format_event(scope: &str, details: &str) -> String {
    if details.trim().is_empty() {
        format!("[{scope}]")
    } else {
        format!("[{scope}] {details}")
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[inline]
pub fn log_event(scope: &str, details: &str) {
    eprintln!("{}", format_event(scope, details));
}

#[cfg(target_arch = "wasm32")]
#[inline]
pub fn log_event(scope: &str, details: &str) {
    let line = format_event(scope, details);
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(&line));
}

#[cfg(test)]
mod tests {
    use super::format_event;

    #[test]
    fn empty_details_print_scope_only() {
        assert_eq!(format_event("share", "  "), "[share]");
        assert_eq!(format_event("share", "AbortError"), "[share] AbortError");
    }
}
