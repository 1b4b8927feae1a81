//! Handheld scanner shell: full-screen modes behind one state value.
//!
//! SYSTEM CONTEXT
//! ==============
//! The scanner runs as a satellite phone app next to the register. There
//! is no sidebar; every mode owns the whole viewport and navigates through
//! the shared `ScannerState`, which also tracks the register link and
//! decides where each back button lands.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod evidence;
pub mod inventory;
pub mod link;
pub mod location;
pub mod photo;
pub mod price_check;
pub mod standby;

use leptos::prelude::*;

use crate::state::scanner::{ScannerMode, ScannerState};

use evidence::EvidenceCameraScreen;
use inventory::InventoryScannerScreen;
use link::LinkScreen;
use location::LocationFinderScreen;
use photo::ProductPhotoScreen;
use price_check::PriceCheckerScreen;
use standby::StandbyScreen;

/// A product the simulated barcode reader can resolve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScanHit {
    pub barcode: &'static str,
    pub name: &'static str,
    pub sku: &'static str,
    pub price: f64,
    pub variants: &'static [&'static str],
}

/// Catalog behind the simulated reader.
pub const SCAN_PRODUCTS: [ScanHit; 3] = [
    ScanHit {
        barcode: "123456",
        name: "Botas Cuadra Avestruz",
        sku: "BOT-001",
        price: 3499.99,
        variants: &["Talla 25", "Talla 26", "Talla 27", "Talla 28"],
    },
    ScanHit {
        barcode: "789012",
        name: "Sombrero Texana Premium",
        sku: "SOM-001",
        price: 1299.99,
        variants: &["Talla 56", "Talla 57", "Talla 58"],
    },
    ScanHit {
        barcode: "345678",
        name: "Cinturón Piel de Res",
        sku: "CIN-001",
        price: 599.99,
        variants: &["30 cm", "32 cm", "34 cm", "36 cm", "38 cm"],
    },
];

/// Maps a uniform roll in `[0, 1)` onto a catalog entry. Out-of-range
/// rolls clamp to the nearest end.
pub fn pick_scan(roll: f64) -> ScanHit {
    // The demo catalog is tiny, so the usize -> f64 widening is exact.
    #[allow(clippy::cast_precision_loss)]
    let width = 1.0 / (SCAN_PRODUCTS.len() as f64);
    let mut cursor = width;
    for hit in &SCAN_PRODUCTS {
        if roll < cursor {
            return *hit;
        }
        cursor += width;
    }
    SCAN_PRODUCTS[SCAN_PRODUCTS.len() - 1]
}

/// Uniform roll for simulated scans. Fixed on the server render.
pub fn random_roll() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Full-screen shell for the Escáner role.
#[component]
pub fn ScannerLayout() -> impl IntoView {
    let state = RwSignal::new(ScannerState::default());
    let mode = Memo::new(move |_| state.get().mode);

    view! {
        <div class="scanner">
            {move || match mode.get() {
                ScannerMode::Link => view! { <LinkScreen state=state/> }.into_any(),
                ScannerMode::Standby => view! { <StandbyScreen state=state/> }.into_any(),
                ScannerMode::Photo => view! { <ProductPhotoScreen state=state/> }.into_any(),
                ScannerMode::Inventory => {
                    view! { <InventoryScannerScreen state=state/> }.into_any()
                }
                ScannerMode::Price => view! { <PriceCheckerScreen state=state/> }.into_any(),
                ScannerMode::Evidence => view! { <EvidenceCameraScreen state=state/> }.into_any(),
                ScannerMode::Location => view! { <LocationFinderScreen state=state/> }.into_any(),
            }}
        </div>
    }
}
