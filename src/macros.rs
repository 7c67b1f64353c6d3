//! Declarative templates for the generated API surface.
//!
//! Every model, union and enum in [`crate::models`] is one invocation of a
//! macro in this file, so all of them share exactly the same shape:
//!
//! - `graph_model!` – a model struct with getters, setters, a field
//!   deserializer table and `serialize`
//! - `graph_union!` – a tagged union dispatching on `@odata.type`
//! - `wire_enum!` – a single-valued wire enum
//! - `wire_flags!` – a bit-flag wire enum

macro_rules! graph_model {
    (@odata_type) => { None };
    (@odata_type $odata:literal) => { Some($odata) };

    // Root type: owns `@odata.type` (written after its own properties) and the
    // additional-data bag.
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(odata_type: $odata:literal,)?
            $(
                $(#[$fmeta:meta])*
                $wire:literal => $field:ident, $setter:ident: $ty:ty;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            odata_type: Option<String>,
            additional_data: $crate::serialization::AdditionalData,
            $( $field: Option<$ty>, )*
        }

        impl $name {
            /// Discriminator stamped by `new` when the type is concrete.
            pub const ODATA_TYPE: Option<&'static str> = graph_model!(@odata_type $($odata)?);

            pub fn new() -> Self {
                Self {
                    odata_type: Self::ODATA_TYPE.map(str::to_string),
                    ..Self::default()
                }
            }

            /// The `@odata.type` discriminator.
            pub fn odata_type(&self) -> Option<&str> {
                self.odata_type.as_deref()
            }

            pub fn set_odata_type(&mut self, value: Option<String>) {
                self.odata_type = value;
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }

                pub fn $setter(&mut self, value: Option<$ty>) {
                    self.$field = value;
                }
            )*
        }

        impl $crate::serialization::Model for $name {
            fn field_deserializers() -> &'static $crate::serialization::FieldDeserializers<Self> {
                static TABLE: ::std::sync::OnceLock<$crate::serialization::FieldDeserializers<$name>> =
                    ::std::sync::OnceLock::new();
                TABLE.get_or_init(|| {
                    let mut res = $crate::serialization::FieldDeserializers::<$name>::new();
                    $(
                        res.insert($wire, $crate::serialization::field::<$name, $ty>(|m| &mut m.$field));
                    )*
                    res.insert(
                        $crate::parser::ODATA_TYPE_KEY,
                        $crate::serialization::field::<$name, String>(|m| &mut m.odata_type),
                    );
                    res
                })
            }
        }

        impl $crate::serialization::Parsable for $name {
            fn create_from_discriminator_value(
                _node: &$crate::parser::JsonParseNode<'_>,
            ) -> Result<Self, $crate::error::DecodeError> {
                Ok(Self::new())
            }

            fn deserialize_fields(
                &mut self,
                node: &$crate::parser::JsonParseNode<'_>,
            ) -> Result<(), $crate::error::DecodeError> {
                $crate::serialization::assign_fields(self, node)
            }

            fn serialize_fields(
                &self,
                writer: &mut $crate::writer::JsonSerializationWriter,
            ) -> Result<(), $crate::error::EncodeError> {
                $( writer.write_value($wire, self.$field.as_ref())?; )*
                writer.write_string_value($crate::parser::ODATA_TYPE_KEY, self.odata_type.as_deref());
                Ok(())
            }

            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                &self.additional_data
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                &mut self.additional_data
            }
        }

        graph_model!(@field_value $name);
    };

    // Derived type: composes its base and overlays its own properties.
    (
        $(#[$meta:meta])*
        pub struct $name:ident : $base:ident {
            $(odata_type: $odata:literal,)?
            $(
                $(#[$fmeta:meta])*
                $wire:literal => $field:ident, $setter:ident: $ty:ty;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            base: $base,
            $( $field: Option<$ty>, )*
        }

        impl $name {
            /// Discriminator stamped by `new` when the type is concrete.
            pub const ODATA_TYPE: Option<&'static str> = graph_model!(@odata_type $($odata)?);

            pub fn new() -> Self {
                let mut model = Self {
                    base: $base::new(),
                    ..Self::default()
                };
                if let Some(odata_type) = Self::ODATA_TYPE {
                    model.base.set_odata_type(Some(odata_type.to_string()));
                }
                model
            }

            pub fn base(&self) -> &$base {
                &self.base
            }

            pub fn base_mut(&mut self) -> &mut $base {
                &mut self.base
            }

            $(
                $(#[$fmeta])*
                pub fn $field(&self) -> Option<&$ty> {
                    self.$field.as_ref()
                }

                pub fn $setter(&mut self, value: Option<$ty>) {
                    self.$field = value;
                }
            )*
        }

        impl ::std::ops::Deref for $name {
            type Target = $base;

            fn deref(&self) -> &$base {
                &self.base
            }
        }

        impl ::std::ops::DerefMut for $name {
            fn deref_mut(&mut self) -> &mut $base {
                &mut self.base
            }
        }

        impl $crate::serialization::Model for $name {
            fn field_deserializers() -> &'static $crate::serialization::FieldDeserializers<Self> {
                static TABLE: ::std::sync::OnceLock<$crate::serialization::FieldDeserializers<$name>> =
                    ::std::sync::OnceLock::new();
                TABLE.get_or_init(|| {
                    let mut res =
                        $crate::serialization::inherit_deserializers::<$base, $name>(|m| &mut m.base);
                    $(
                        res.insert($wire, $crate::serialization::field::<$name, $ty>(|m| &mut m.$field));
                    )*
                    res
                })
            }
        }

        impl $crate::serialization::Parsable for $name {
            fn create_from_discriminator_value(
                _node: &$crate::parser::JsonParseNode<'_>,
            ) -> Result<Self, $crate::error::DecodeError> {
                Ok(Self::new())
            }

            fn deserialize_fields(
                &mut self,
                node: &$crate::parser::JsonParseNode<'_>,
            ) -> Result<(), $crate::error::DecodeError> {
                $crate::serialization::assign_fields(self, node)
            }

            fn serialize_fields(
                &self,
                writer: &mut $crate::writer::JsonSerializationWriter,
            ) -> Result<(), $crate::error::EncodeError> {
                $crate::serialization::Parsable::serialize_fields(&self.base, writer)?;
                $( writer.write_value($wire, self.$field.as_ref())?; )*
                Ok(())
            }

            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                $crate::serialization::Parsable::additional_data(&self.base)
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                $crate::serialization::Parsable::additional_data_mut(&mut self.base)
            }
        }

        graph_model!(@field_value $name);
    };

    (@field_value $name:ident) => {
        impl $crate::serialization::FieldValue for $name {
            fn read(
                node: &$crate::parser::JsonParseNode<'_>,
            ) -> Result<Option<Self>, $crate::error::DecodeError> {
                node.get_object_value::<Self>()
            }

            fn encode(&self) -> Result<::serde_json::Value, $crate::error::EncodeError> {
                $crate::writer::serialize_object(self)
            }
        }
    };
}

macro_rules! graph_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $base:ident $(= $base_wire:literal)? {
            $( $wire:literal => $variant:ident, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $base(Box<$base>),
            $( $variant(Box<$variant>), )*
        }

        impl $name {
            /// Discriminators that select a subtype, in dispatch order.
            pub const DISCRIMINATORS: &'static [&'static str] = &[$($wire),*];

            /// Rust name of the concrete type held.
            pub fn type_name(&self) -> &'static str {
                match self {
                    Self::$base(_) => stringify!($base),
                    $( Self::$variant(_) => stringify!($variant), )*
                }
            }

            /// The `@odata.type` value the instance carries.
            pub fn discriminator(&self) -> Option<&str> {
                self.base().odata_type()
            }

            pub fn base(&self) -> &$base {
                match self {
                    Self::$base(m) => m,
                    $( Self::$variant(m) => {
                        let base: &$base = m;
                        base
                    } )*
                }
            }

            pub fn base_mut(&mut self) -> &mut $base {
                match self {
                    Self::$base(m) => m,
                    $( Self::$variant(m) => {
                        let base: &mut $base = m;
                        base
                    } )*
                }
            }
        }

        impl From<$base> for $name {
            fn from(model: $base) -> Self {
                Self::$base(Box::new(model))
            }
        }

        $(
            impl From<$variant> for $name {
                fn from(model: $variant) -> Self {
                    Self::$variant(Box::new(model))
                }
            }
        )*

        impl $crate::serialization::Parsable for $name {
            fn create_from_discriminator_value(
                node: &$crate::parser::JsonParseNode<'_>,
            ) -> Result<Self, $crate::error::DecodeError> {
                if let Some(tag) = node.discriminator()? {
                    match tag.as_str() {
                        $( $wire => return Ok(Self::$variant(Box::new($variant::new()))), )*
                        $( $base_wire => {} )?
                        other => ::tracing::debug!(
                            discriminator = other,
                            base = stringify!($base),
                            "unrecognized discriminator, decoding as base type"
                        ),
                    }
                }
                Ok(Self::$base(Box::new($base::new())))
            }

            fn deserialize_fields(
                &mut self,
                node: &$crate::parser::JsonParseNode<'_>,
            ) -> Result<(), $crate::error::DecodeError> {
                match self {
                    Self::$base(m) => $crate::serialization::Parsable::deserialize_fields(&mut **m, node),
                    $( Self::$variant(m) => $crate::serialization::Parsable::deserialize_fields(&mut **m, node), )*
                }
            }

            fn serialize_fields(
                &self,
                writer: &mut $crate::writer::JsonSerializationWriter,
            ) -> Result<(), $crate::error::EncodeError> {
                match self {
                    Self::$base(m) => $crate::serialization::Parsable::serialize_fields(&**m, writer),
                    $( Self::$variant(m) => $crate::serialization::Parsable::serialize_fields(&**m, writer), )*
                }
            }

            fn additional_data(&self) -> &$crate::serialization::AdditionalData {
                match self {
                    Self::$base(m) => $crate::serialization::Parsable::additional_data(&**m),
                    $( Self::$variant(m) => $crate::serialization::Parsable::additional_data(&**m), )*
                }
            }

            fn additional_data_mut(&mut self) -> &mut $crate::serialization::AdditionalData {
                match self {
                    Self::$base(m) => $crate::serialization::Parsable::additional_data_mut(&mut **m),
                    $( Self::$variant(m) => $crate::serialization::Parsable::additional_data_mut(&mut **m), )*
                }
            }
        }

        impl $crate::serialization::FieldValue for $name {
            fn read(
                node: &$crate::parser::JsonParseNode<'_>,
            ) -> Result<Option<Self>, $crate::error::DecodeError> {
                node.get_object_value::<Self>()
            }

            fn encode(&self) -> Result<::serde_json::Value, $crate::error::EncodeError> {
                $crate::writer::serialize_object(self)
            }
        }
    };
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::enums::WireEnum for $name {
            const MULTI_VALUE: bool = false;

            fn parse(value: &str) -> Option<Self> {
                match value {
                    $( $wire => Some(Self::$variant), )+
                    _ => None,
                }
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl $crate::serialization::FieldValue for $name {
            fn read(
                node: &$crate::parser::JsonParseNode<'_>,
            ) -> Result<Option<Self>, $crate::error::DecodeError> {
                node.get_enum_value::<Self>()
            }

            fn encode(&self) -> Result<::serde_json::Value, $crate::error::EncodeError> {
                Ok(::serde_json::Value::String(self.as_str().to_string()))
            }
        }
    };
}

macro_rules! wire_flags {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$vmeta:meta])* const $flag:ident = $bits:literal => $wire:literal; )+
        }
    ) => {
        ::bitflags::bitflags! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
            pub struct $name: u32 {
                $( $(#[$vmeta])* const $flag = $bits; )+
            }
        }

        impl $name {
            /// Every member with its wire name, in declaration order.
            pub const WIRE_NAMES: &'static [(Self, &'static str)] = &[$((Self::$flag, $wire)),+];
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::enums::join_flag_names(*self, Self::WIRE_NAMES))
            }
        }

        impl $crate::enums::WireEnum for $name {
            const MULTI_VALUE: bool = true;

            fn parse(value: &str) -> Option<Self> {
                $crate::enums::parse_flag_tokens(value, Self::WIRE_NAMES)
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl $crate::serialization::FieldValue for $name {
            fn read(
                node: &$crate::parser::JsonParseNode<'_>,
            ) -> Result<Option<Self>, $crate::error::DecodeError> {
                node.get_enum_value::<Self>()
            }

            fn encode(&self) -> Result<::serde_json::Value, $crate::error::EncodeError> {
                Ok(::serde_json::Value::String(self.to_string()))
            }
        }
    };
}
