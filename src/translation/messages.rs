//! Fixed user-facing messages, in the application's Persian locale.

/// Shown when translate is invoked without source text.
pub const EMPTY_SOURCE: &str = "متنی وارد کنید";

/// Shown in place of the result when every key failed.
pub const TRANSLATION_FAILED: &str = "خطا در ترجمه. لطفاً کلید API را بررسی کنید.";

/// Transient notice accompanying [`TRANSLATION_FAILED`].
pub const CONNECTION_FAILED: &str = "خطا در برقراری ارتباط";

/// Swapping is refused while the source language is `auto`.
pub const CANNOT_SWAP_AUTO: &str = "زبان خودکار جابجا نمی‌شود";

pub const TEXT_CLEARED: &str = "پاک شد";

pub const MISSING_API_KEY: &str = "کلید API وارد نشده است";

pub const FETCHING_MODELS: &str = "در حال دریافت...";

pub const MODELS_UPDATED: &str = "لیست مدل‌ها بروز شد";

pub const MODELS_FETCH_FAILED: &str = "خطا در دریافت لیست";

pub const TRANSLATING: &str = "در حال پردازش...";
