//! Thin `localStorage` access shared by the theme and draft helpers.
//!
//! Outside the browser, or when storage is blocked, reads find nothing and
//! writes report failure.

pub fn get(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        local_storage()?.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Returns false when the write was refused (quota, privacy mode, SSR).
pub fn set(key: &str, value: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        local_storage().is_some_and(|storage| storage.set_item(key, value).is_ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
        false
    }
}

pub fn remove(key: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
