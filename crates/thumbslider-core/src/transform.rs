/// How the knob is translated along the track.
///
/// Chosen once per widget from a capability probe; it only changes which
/// style properties are written, never where the knob ends up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TransformMode {
    /// Hardware accelerated `translate3d`, written to the WebKit property only.
    Translate3d,
    /// Plain `translateX`, written to every vendor-prefixed property.
    #[default]
    TranslateX,
}

const TRANSLATE_3D_PROPERTIES: &[&str] = &["-webkit-transform"];
const TRANSLATE_X_PROPERTIES: &[&str] = &[
    "-webkit-transform",
    "-moz-transform",
    "-ms-transform",
    "-o-transform",
    "transform",
];

impl TransformMode {
    pub fn from_3d_support(supported: bool) -> Self {
        if supported {
            TransformMode::Translate3d
        } else {
            TransformMode::TranslateX
        }
    }

    pub fn properties(self) -> &'static [&'static str] {
        match self {
            TransformMode::Translate3d => TRANSLATE_3D_PROPERTIES,
            TransformMode::TranslateX => TRANSLATE_X_PROPERTIES,
        }
    }

    /// CSS transform value moving the knob to `x` pixels.
    pub fn css_value(self, x: f64) -> String {
        match self {
            TransformMode::Translate3d => format!("translate3d({x}px, 0, 0)"),
            TransformMode::TranslateX => format!("translateX({x}px)"),
        }
    }
}
