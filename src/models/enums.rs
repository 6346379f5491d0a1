//! Closed string enumerations used by the collection model
//!
//! The service adds values over time, so every enumeration carries an
//! `Unknown` variant that holds the raw wire string and writes it back
//! unchanged. Known values match case-insensitively because the service
//! echoes some of them in lowercase (`"consistent"`, `"hash"`).

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Value this client does not recognise, kept verbatim
            Unknown(String),
        }

        impl $name {
            /// Wire representation
            pub fn as_str(&self) -> &str {
                match self {
                    $( $name::$variant => $wire, )+
                    $name::Unknown(raw) => raw.as_str(),
                }
            }

            /// Whether the value fell outside the known set
            pub fn is_unknown(&self) -> bool {
                matches!(self, $name::Unknown(_))
            }
        }

        impl From<&str> for $name {
            fn from(raw: &str) -> Self {
                $(
                    if raw.eq_ignore_ascii_case($wire) {
                        return $name::$variant;
                    }
                )+
                $name::Unknown(raw.to_string())
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <String as serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(raw.as_str()))
            }
        }
    };
}

wire_enum! {
    /// How the service keeps the index up to date
    pub enum IndexingMode {
        /// Index updated synchronously with writes
        Consistent => "Consistent",
        /// Index updated asynchronously
        Lazy => "Lazy",
    }
}

wire_enum! {
    /// Data type an index applies to
    pub enum IndexDataType {
        String => "String",
        Number => "Number",
        Point => "Point",
        Polygon => "Polygon",
        LineString => "LineString",
    }
}

wire_enum! {
    /// Index kind
    pub enum IndexKind {
        Hash => "Hash",
        Range => "Range",
        Spatial => "Spatial",
    }
}

wire_enum! {
    /// Sort direction of a composite index path
    pub enum Order {
        Ascending => "ascending",
        Descending => "descending",
    }
}

wire_enum! {
    /// Partitioning scheme of a partition key
    pub enum PartitionKeyKind {
        Hash => "Hash",
    }
}

wire_enum! {
    /// Conflict resolution strategy for multi-region writes
    pub enum ConflictResolutionMode {
        /// Highest value at the resolution path wins
        LastWriterWins => "LastWriterWins",
        /// A stored procedure decides
        Custom => "Custom",
    }
}

wire_enum! {
    /// Coordinate system for spatial data
    pub enum GeospatialType {
        Geography => "Geography",
    }
}

wire_enum! {
    /// Lifecycle status of a partition key range
    pub enum PartitionKeyRangeStatus {
        Online => "online",
    }
}
