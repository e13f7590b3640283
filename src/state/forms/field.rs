//! Contact form field value objects

/// The three fields of the contact form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Message,
}

impl FieldName {
    /// All fields in tab order
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Email, FieldName::Message];

    /// Key used in the JSON payload
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    /// Label shown in the field border
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Full Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    /// Position in tab order
    pub fn index(&self) -> usize {
        match self {
            Self::Name => 0,
            Self::Email => 1,
            Self::Message => 2,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Message)
    }
}

/// A single text field with its current value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub value: String,
}

impl FormField {
    pub fn new(name: FieldName) -> Self {
        Self {
            name,
            value: String::new(),
        }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    pub fn is_multiline(&self) -> bool {
        self.name.is_multiline()
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}
