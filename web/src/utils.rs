use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};
use serde::Serialize;
use serde::de::DeserializeOwned;
use yew::prelude::*;

/// Local storage key a value is persisted under.
pub(crate) trait StorageKey {
    const KEY: &'static str;
}

pub(crate) trait LocalOrDefault {
    fn local_or_default() -> Self;
}

impl<T: StorageKey + DeserializeOwned + Default> LocalOrDefault for T {
    fn local_or_default() -> Self {
        match LocalStorage::get(T::KEY) {
            Ok(value) => value,
            Err(StorageError::KeyNotFound(_)) => Default::default(),
            Err(err) => {
                log::warn!("Could not load {} from local storage: {:?}", T::KEY, err);
                Default::default()
            }
        }
    }
}

pub(crate) trait LocalSave {
    fn local_save(&self);
}

impl<T: StorageKey + Serialize> LocalSave for T {
    fn local_save(&self) {
        if let Err(err) = LocalStorage::set(T::KEY, self) {
            log::error!("Could not save {} to local storage: {:?}", T::KEY, err);
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct ModalProps {
    #[prop_or_default]
    pub children: Html,
}

/// Renders its children under `document.body`, so the stats dialog overlays
/// the board rather than flowing inside it.
#[function_component]
pub(crate) fn Modal(props: &ModalProps) -> Html {
    create_portal(props.children.clone(), gloo::utils::body().into())
}

/// Seed for the spawner when the page does not force one, built from two
/// 32-bit `Math.random` draws.
pub(crate) fn js_random_seed() -> u64 {
    use js_sys::Math::random;
    let draw = || (random() * f64::from(u32::MAX)) as u64;
    (draw() << 32) | draw()
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn random_seed_fills_both_halves() {
        let seeds: Vec<u64> = (0..8).map(|_| js_random_seed()).collect();

        assert!(seeds.iter().any(|seed| seed >> 32 != 0));
        assert!(seeds.iter().any(|seed| seed & u64::from(u32::MAX) != 0));
        assert!(seeds.windows(2).any(|pair| pair[0] != pair[1]));
    }
}
