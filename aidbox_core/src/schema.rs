//! Attribute schemas for the provider block and the `aidbox_license` resource.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AttributeType {
    String,
    Int64,
    Bool,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attribute {
    pub name: &'static str,
    pub kind: AttributeType,
    pub description: &'static str,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    /// Changing the value forces a new license to be issued.
    pub requires_replace: bool,
}

#[derive(Clone, Debug)]
pub struct Schema {
    pub description: &'static str,
    pub attributes: Vec<Attribute>,
}

impl Attribute {
    const fn new(name: &'static str, kind: AttributeType) -> Self {
        Self {
            name,
            kind,
            description: "",
            required: false,
            optional: false,
            computed: false,
            sensitive: false,
            requires_replace: false,
        }
    }

    #[must_use]
    pub const fn required(name: &'static str) -> Self {
        let mut attribute = Self::new(name, AttributeType::String);
        attribute.required = true;
        attribute
    }

    #[must_use]
    pub const fn optional(name: &'static str) -> Self {
        let mut attribute = Self::new(name, AttributeType::String);
        attribute.optional = true;
        attribute
    }

    #[must_use]
    pub const fn computed(name: &'static str, kind: AttributeType) -> Self {
        let mut attribute = Self::new(name, kind);
        attribute.computed = true;
        attribute
    }

    #[must_use]
    pub const fn with_computed(mut self) -> Self {
        self.computed = true;
        self
    }

    #[must_use]
    pub const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    #[must_use]
    pub const fn requires_replace(mut self) -> Self {
        self.requires_replace = true;
        self
    }

    #[must_use]
    pub const fn describe(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }
}

impl Schema {
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Names of the attributes that cannot be changed in place.
    pub fn replace_attributes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.attributes
            .iter()
            .filter(|a| a.requires_replace)
            .map(|a| a.name)
    }
}

#[must_use]
pub fn provider_schema() -> Schema {
    Schema {
        description: "Aidbox portal provider",
        attributes: vec![
            Attribute::optional("endpoint").describe("Aidbox RPC API endpoint"),
            Attribute::optional("token")
                .sensitive()
                .describe("Aidbox token. Falls back to the AIDBOX_TOKEN environment variable"),
            Attribute::optional("format").describe("Wire format of the RPC calls, yaml or json"),
        ],
    }
}

#[must_use]
pub fn license_schema() -> Schema {
    use AttributeType::{Bool, Int64, String};

    Schema {
        description: "Manages an Aidbox license",
        attributes: vec![
            Attribute::computed("id", String),
            Attribute::required("name").requires_replace(),
            Attribute::optional("product")
                .with_computed()
                .requires_replace()
                .describe("Defaults to aidbox"),
            Attribute::required("type").requires_replace(),
            Attribute::computed("expiration", String),
            Attribute::computed("status", String),
            Attribute::computed("max_instances", Int64),
            Attribute::computed("creator_id", String),
            Attribute::computed("project_id", String),
            Attribute::computed("offline", Bool),
            Attribute::computed("created", String),
            Attribute::computed("meta_last_updated", String),
            Attribute::computed("meta_created_at", String),
            Attribute::computed("meta_version_id", String),
            Attribute::computed("issuer", String),
            Attribute::computed("info_hosting", String),
            Attribute::computed("jwt", String).sensitive(),
        ],
    }
}
