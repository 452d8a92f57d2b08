//! Supported controller models.

use super::Symbol;

code_enum! {
    /// Jrk G2 hardware model.
    pub enum Product => PRODUCT {
        /// Jrk G2 18v19
        Umc04a30v = 1, "umc04a_30v", "Jrk G2 18v19";
        /// Jrk G2 24v13
        Umc04a40v = 2, "umc04a_40v", "Jrk G2 24v13";
        /// Jrk G2 18v27
        Umc05a30v = 3, "umc05a_30v", "Jrk G2 18v27";
        /// Jrk G2 24v21
        Umc05a40v = 4, "umc05a_40v", "Jrk G2 24v21";
        /// Jrk G2 21v3
        Umc06a = 5, "umc06a", "Jrk G2 21v3";
    }
}

impl Product {
    /// Every supported product.
    pub const ALL: [Product; 5] = [
        Product::Umc04a30v,
        Product::Umc04a40v,
        Product::Umc05a30v,
        Product::Umc05a40v,
        Product::Umc06a,
    ];

    /// Looks up a product by its 32-bit identifier.
    pub fn from_id(id: u32) -> Option<Self> {
        u8::try_from(id).ok().and_then(Self::from_code)
    }

    /// Whether the motor driver has a hardware current chopping limit.
    ///
    /// The umc06a instead regulates current in firmware and has no
    /// hard over-current threshold or encoded hard current limits.
    pub const fn has_hard_current_limit(self) -> bool {
        !matches!(self, Product::Umc06a)
    }

    /// Looks up a product by its short name.
    pub fn from_short_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.short_name() == name)
    }
}
