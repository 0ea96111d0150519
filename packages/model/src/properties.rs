//! Per-type property records.
//!
//! Every record deserializes with defaults for missing optional keys;
//! required keys are listed in each record's [`FieldSpec`]s and checked by
//! [`decode_properties`](crate::schema::decode_properties).

use crate::component::{ComponentKind, ComponentType};
use crate::schema::{check_range, FieldKind, FieldSpec, PropertySchema, SchemaError};
use serde::{Deserialize, Serialize};

macro_rules! string_enum {
    ($name:ident { $($variant:ident => $text:literal),+ $(,)? } default $default:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $text)]
                $variant,
            )+
        }

        impl $name {
            pub const OPTIONS: &'static [&'static str] = &[$($text),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text,)+
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::$default
            }
        }
    };
}

string_enum!(TextTag {
    P => "p", H1 => "h1", H2 => "h2", H3 => "h3", H4 => "h4", H5 => "h5", H6 => "h6", Span => "span",
} default P);

string_enum!(FontWeight {
    Normal => "normal", Medium => "medium", Semibold => "semibold", Bold => "bold",
} default Normal);

string_enum!(TextAlign {
    Left => "left", Center => "center", Right => "right", Justify => "justify",
} default Left);

string_enum!(HorizontalAlign {
    Left => "left", Center => "center", Right => "right",
} default Center);

string_enum!(ObjectFit {
    Cover => "cover", Contain => "contain", Fill => "fill",
} default Cover);

string_enum!(ButtonVariant {
    Primary => "primary", Secondary => "secondary", Outline => "outline", Ghost => "ghost",
} default Primary);

string_enum!(ButtonSize {
    Sm => "sm", Md => "md", Lg => "lg",
} default Md);

string_enum!(HeroHeight {
    Sm => "sm", Md => "md", Lg => "lg", Full => "full",
} default Lg);

string_enum!(ContainerLayout {
    Block => "block", Row => "row", Column => "column", Grid => "grid",
} default Column);

string_enum!(AlignItems {
    Start => "start", Center => "center", End => "end", Stretch => "stretch",
} default Stretch);

string_enum!(JustifyContent {
    Start => "start", Center => "center", End => "end", Between => "between", Around => "around",
} default Start);

string_enum!(MaxWidth {
    Sm => "sm", Md => "md", Lg => "lg", Xl => "xl", Full => "full",
} default Full);

/// Navigation target of a button-like element
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Link {
    pub url: String,
    pub open_in_new_tab: bool,
}

impl Link {
    pub fn to(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            open_in_new_tab: false,
        }
    }

    /// A link with an empty url has nowhere to go
    pub fn is_navigable(&self) -> bool {
        !self.url.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TextProperties {
    pub content: String,
    pub tag: TextTag,
    pub font_size: u32,
    pub font_weight: FontWeight,
    pub color: String,
    pub align: TextAlign,
}

impl Default for TextProperties {
    fn default() -> Self {
        Self {
            content: "Enter your text here".to_string(),
            tag: TextTag::P,
            font_size: 16,
            font_weight: FontWeight::Normal,
            color: "#1f2937".to_string(),
            align: TextAlign::Left,
        }
    }
}

impl PropertySchema for TextProperties {
    const TYPE: ComponentType = ComponentType::Text;

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required("content", "Content", FieldKind::TextArea),
            FieldSpec::optional("tag", "Tag", FieldKind::Select { options: TextTag::OPTIONS }),
            FieldSpec::optional("fontSize", "Font size", FieldKind::Number { min: 8.0, max: 128.0 }),
            FieldSpec::optional("fontWeight", "Font weight", FieldKind::Select { options: FontWeight::OPTIONS }),
            FieldSpec::optional("color", "Color", FieldKind::Color),
            FieldSpec::optional("align", "Alignment", FieldKind::Select { options: TextAlign::OPTIONS }),
        ]
    }

    fn validate(&self) -> Result<(), SchemaError> {
        check_range("properties.fontSize", self.font_size, 8, 128)
    }

    fn into_kind(self) -> ComponentKind {
        ComponentKind::Text(self)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageProperties {
    pub src: String,
    pub alt: String,
    pub object_fit: ObjectFit,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    pub border_radius: u32,
}

impl PropertySchema for ImageProperties {
    const TYPE: ComponentType = ComponentType::Image;

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required("src", "Image", FieldKind::Url),
            FieldSpec::optional("alt", "Alt text", FieldKind::Text),
            FieldSpec::optional("objectFit", "Fit", FieldKind::Select { options: ObjectFit::OPTIONS }),
            FieldSpec::optional("width", "Width", FieldKind::Number { min: 1.0, max: 4000.0 }),
            FieldSpec::optional("height", "Height", FieldKind::Number { min: 1.0, max: 4000.0 }),
            FieldSpec::optional("borderRadius", "Corner radius", FieldKind::Number { min: 0.0, max: 500.0 }),
        ]
    }

    fn validate(&self) -> Result<(), SchemaError> {
        if let Some(width) = self.width {
            check_range("properties.width", width, 1, 4000)?;
        }
        if let Some(height) = self.height {
            check_range("properties.height", height, 1, 4000)?;
        }
        check_range("properties.borderRadius", self.border_radius, 0, 500)
    }

    fn into_kind(self) -> ComponentKind {
        ComponentKind::Image(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonProperties {
    pub text: String,
    pub link: Link,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub full_width: bool,
}

impl Default for ButtonProperties {
    fn default() -> Self {
        Self {
            text: "Click Me".to_string(),
            link: Link::to("#"),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Md,
            full_width: false,
        }
    }
}

impl PropertySchema for ButtonProperties {
    const TYPE: ComponentType = ComponentType::Button;

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required("text", "Label", FieldKind::Text),
            FieldSpec::required("link", "Link", FieldKind::Link),
            FieldSpec::optional("variant", "Variant", FieldKind::Select { options: ButtonVariant::OPTIONS }),
            FieldSpec::optional("size", "Size", FieldKind::Select { options: ButtonSize::OPTIONS }),
            FieldSpec::optional("fullWidth", "Full width", FieldKind::Toggle),
        ]
    }

    fn validate(&self) -> Result<(), SchemaError> {
        Ok(())
    }

    fn into_kind(self) -> ComponentKind {
        ComponentKind::Button(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroProperties {
    pub title: String,
    pub subtitle: String,
    pub background_image: String,
    pub overlay_opacity: f32,
    pub height: HeroHeight,
    pub alignment: HorizontalAlign,
    pub cta_text: String,
    pub cta_link: Link,
    pub text_color: String,
}

impl Default for HeroProperties {
    fn default() -> Self {
        Self {
            title: "Welcome to Our Site".to_string(),
            subtitle: "Discover our latest collection".to_string(),
            background_image: String::new(),
            overlay_opacity: 0.4,
            height: HeroHeight::Lg,
            alignment: HorizontalAlign::Center,
            cta_text: "Shop Now".to_string(),
            cta_link: Link::to("#"),
            text_color: "#ffffff".to_string(),
        }
    }
}

impl PropertySchema for HeroProperties {
    const TYPE: ComponentType = ComponentType::Hero;

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required("title", "Title", FieldKind::Text),
            FieldSpec::optional("subtitle", "Subtitle", FieldKind::TextArea),
            FieldSpec::optional("backgroundImage", "Background image", FieldKind::Url),
            FieldSpec::optional("overlayOpacity", "Overlay opacity", FieldKind::Number { min: 0.0, max: 1.0 }),
            FieldSpec::optional("height", "Height", FieldKind::Select { options: HeroHeight::OPTIONS }),
            FieldSpec::optional("alignment", "Alignment", FieldKind::Select { options: HorizontalAlign::OPTIONS }),
            FieldSpec::optional("ctaText", "Button label", FieldKind::Text),
            FieldSpec::optional("ctaLink", "Button link", FieldKind::Link),
            FieldSpec::optional("textColor", "Text color", FieldKind::Color),
        ]
    }

    fn validate(&self) -> Result<(), SchemaError> {
        check_range("properties.overlayOpacity", self.overlay_opacity, 0.0, 1.0)
    }

    fn into_kind(self) -> ComponentKind {
        ComponentKind::Hero(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardProperties {
    pub title: String,
    pub description: String,
    pub image_src: String,
    pub image_alt: String,
    pub button_text: String,
    pub button_link: Link,
}

impl Default for CardProperties {
    fn default() -> Self {
        Self {
            title: "Card Title".to_string(),
            description: "Card description goes here.".to_string(),
            image_src: String::new(),
            image_alt: String::new(),
            button_text: "Learn More".to_string(),
            button_link: Link::to("#"),
        }
    }
}

impl PropertySchema for CardProperties {
    const TYPE: ComponentType = ComponentType::Card;

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required("title", "Title", FieldKind::Text),
            FieldSpec::optional("description", "Description", FieldKind::TextArea),
            FieldSpec::optional("imageSrc", "Image", FieldKind::Url),
            FieldSpec::optional("imageAlt", "Image alt text", FieldKind::Text),
            FieldSpec::optional("buttonText", "Button label", FieldKind::Text),
            FieldSpec::optional("buttonLink", "Button link", FieldKind::Link),
        ]
    }

    fn validate(&self) -> Result<(), SchemaError> {
        Ok(())
    }

    fn into_kind(self) -> ComponentKind {
        ComponentKind::Card(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerProperties {
    pub layout: ContainerLayout,
    pub gap: u32,
    pub columns: u8,
    pub align_items: AlignItems,
    pub justify_content: JustifyContent,
    pub max_width: MaxWidth,
}

impl Default for ContainerProperties {
    fn default() -> Self {
        Self {
            layout: ContainerLayout::Column,
            gap: 16,
            columns: 2,
            align_items: AlignItems::Stretch,
            justify_content: JustifyContent::Start,
            max_width: MaxWidth::Full,
        }
    }
}

impl PropertySchema for ContainerProperties {
    const TYPE: ComponentType = ComponentType::Container;

    fn fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::required("layout", "Layout", FieldKind::Select { options: ContainerLayout::OPTIONS }),
            FieldSpec::optional("gap", "Gap", FieldKind::Number { min: 0.0, max: 256.0 }),
            FieldSpec::optional("columns", "Columns", FieldKind::Number { min: 1.0, max: 12.0 }),
            FieldSpec::optional("alignItems", "Align items", FieldKind::Select { options: AlignItems::OPTIONS }),
            FieldSpec::optional(
                "justifyContent",
                "Justify content",
                FieldKind::Select { options: JustifyContent::OPTIONS },
            ),
            FieldSpec::optional("maxWidth", "Max width", FieldKind::Select { options: MaxWidth::OPTIONS }),
        ]
    }

    fn validate(&self) -> Result<(), SchemaError> {
        check_range("properties.gap", self.gap, 0, 256)?;
        check_range("properties.columns", self.columns, 1, 12)
    }

    fn into_kind(self) -> ComponentKind {
        ComponentKind::Container(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacerProperties {
    pub height: u32,
}

impl Default for SpacerProperties {
    fn default() -> Self {
        Self { height: 40 }
    }
}

impl PropertySchema for SpacerProperties {
    const TYPE: ComponentType = ComponentType::Spacer;

    fn fields() -> Vec<FieldSpec> {
        vec![FieldSpec::required(
            "height",
            "Height",
            FieldKind::Number { min: 0.0, max: 1000.0 },
        )]
    }

    fn validate(&self) -> Result<(), SchemaError> {
        check_range("properties.height", self.height, 0, 1000)
    }

    fn into_kind(self) -> ComponentKind {
        ComponentKind::Spacer(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::decode_properties;
    use serde_json::json;

    /// Every select option must be a value serde accepts
    fn assert_options_decode<P: PropertySchema>() {
        for field in P::fields() {
            if let FieldKind::Select { options } = field.kind {
                for option in options {
                    let mut value = serde_json::to_value(P::default()).unwrap();
                    value[field.name] = json!(option);
                    assert!(
                        decode_properties::<P>(value).is_ok(),
                        "{}.{} rejects its own option {:?}",
                        P::TYPE.as_str(),
                        field.name,
                        option
                    );
                }
            }
        }
    }

    /// Every field name must be a key of the serialized record
    fn assert_fields_match_keys<P: PropertySchema>() {
        let value = serde_json::to_value(P::default()).unwrap();
        let object = value.as_object().unwrap();
        for field in P::fields() {
            if matches!(field.name, "width" | "height") && P::TYPE == ComponentType::Image {
                continue; // optional, skipped when unset
            }
            assert!(
                object.contains_key(field.name),
                "{} has no key {}",
                P::TYPE.as_str(),
                field.name
            );
        }
    }

    #[test]
    fn test_field_specs_describe_records() {
        assert_fields_match_keys::<TextProperties>();
        assert_fields_match_keys::<ImageProperties>();
        assert_fields_match_keys::<ButtonProperties>();
        assert_fields_match_keys::<HeroProperties>();
        assert_fields_match_keys::<CardProperties>();
        assert_fields_match_keys::<ContainerProperties>();
        assert_fields_match_keys::<SpacerProperties>();
    }

    #[test]
    fn test_select_options_decode() {
        assert_options_decode::<TextProperties>();
        assert_options_decode::<ImageProperties>();
        assert_options_decode::<ButtonProperties>();
        assert_options_decode::<HeroProperties>();
        assert_options_decode::<ContainerProperties>();
    }

    #[test]
    fn test_defaults_validate() {
        assert!(TextProperties::default().validate().is_ok());
        assert!(ImageProperties::default().validate().is_ok());
        assert!(ButtonProperties::default().validate().is_ok());
        assert!(HeroProperties::default().validate().is_ok());
        assert!(CardProperties::default().validate().is_ok());
        assert!(ContainerProperties::default().validate().is_ok());
        assert!(SpacerProperties::default().validate().is_ok());
    }

    #[test]
    fn test_missing_required_field() {
        let err = decode_properties::<TextProperties>(json!({ "fontSize": 20 })).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingField {
                field: "properties.content".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let err = decode_properties::<ButtonProperties>(json!({
            "text": "Buy",
            "link": { "url": "/cart" },
            "variant": "neon"
        }))
        .unwrap_err();

        assert!(matches!(err, SchemaError::InvalidValue { .. }));
    }

    #[test]
    fn test_hero_overlay_out_of_range() {
        let err = decode_properties::<HeroProperties>(json!({
            "title": "Sale",
            "overlayOpacity": 1.5
        }))
        .unwrap_err();

        assert_eq!(err.field(), "properties.overlayOpacity");
    }

    #[test]
    fn test_partial_link_defaults_new_tab() {
        let button = decode_properties::<ButtonProperties>(json!({
            "text": "Go",
            "link": { "url": "" }
        }))
        .unwrap();

        assert_eq!(button.link, Link::to(""));
        assert!(!button.link.is_navigable());
    }

    #[test]
    fn test_hero_defaults() {
        let hero = HeroProperties::default();
        assert_eq!(hero.title, "Welcome to Our Site");
        assert_eq!(hero.height, HeroHeight::Lg);
        assert_eq!(serde_json::to_value(hero.height).unwrap(), json!("lg"));
    }
}
