//! Embedded translation resources.
//!
//! Every supported locale is declared once below; the macro wires the
//! resource text into the ordered manifest the store loads from.

use paste::paste;

macro_rules! define_locales {
    ($( $id:ident => $tag:literal ),* $(,)?) => {
        paste! {
            $(
                const [<$id _RESOURCE>]: &str = include_str!(concat!(
                    env!("CARGO_MANIFEST_DIR"),
                    "/translations/",
                    $tag,
                    ".txt"
                ));
            )*

            /// `(locale tag, resource text)` pairs in declaration order.
            pub static MANIFEST: &[(&str, &str)] = &[
                $( ($tag, [<$id _RESOURCE>]) ),*
            ];
        }
    };
}

// `en` is the terminal fallback and must stay in this list.
define_locales! {
    EN => "en",
    FR => "fr",
    DE => "de",
}
