use serde::Serialize;
use serde_json::{Map, Number, Value};

/// A raw JSON object as submitted by a client.
pub type Payload = Map<String, Value>;

pub const ID: &str = "id";
pub const NOME: &str = "nome";
pub const EMAIL: &str = "email";
pub const IDADE: &str = "idade";
pub const TELEFONE: &str = "telefone";
pub const CIDADE: &str = "cidade";

/// A stored user record.
///
/// The known fields are typed; anything else a client sent lives in `extra`
/// and is serialized alongside them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: u64,
    pub nome: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idade: Option<Number>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cidade: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(id: u64, nome: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            nome: nome.into(),
            email: email.into(),
            idade: None,
            telefone: None,
            cidade: None,
            extra: Map::new(),
        }
    }

    pub fn with_idade(mut self, idade: impl Into<Number>) -> Self {
        self.idade = Some(idade.into());
        self
    }

    pub fn with_telefone(mut self, telefone: impl Into<String>) -> Self {
        self.telefone = Some(telefone.into());
        self
    }

    pub fn with_cidade(mut self, cidade: impl Into<String>) -> Self {
        self.cidade = Some(cidade.into());
        self
    }

    /// Shallow field-level merge: every field present in `fields` overwrites
    /// the stored value, everything else is kept. `id` is never touched.
    pub fn merge(&mut self, fields: UserFields) {
        if let Some(nome) = fields.nome {
            self.nome = nome;
        }
        if let Some(email) = fields.email {
            self.email = email;
        }
        if let Some(idade) = fields.idade {
            self.idade = Some(idade);
        }
        if let Some(telefone) = fields.telefone {
            self.extra.remove(TELEFONE);
            self.telefone = Some(telefone);
        }
        if let Some(cidade) = fields.cidade {
            self.extra.remove(CIDADE);
            self.cidade = Some(cidade);
        }

        for (key, value) in fields.extra {
            // A non-string phone/city replaces the typed slot
            match key.as_str() {
                TELEFONE => self.telefone = None,
                CIDADE => self.cidade = None,
                _ => {}
            }
            self.extra.insert(key, value);
        }
    }

    /// JSON view of the record, as returned to clients.
    #[cfg(test)]
    pub(crate) fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap()
    }
}

/// The typed view of a payload that already passed validation.
///
/// Every field is optional: creation payloads carry at least `nome` and
/// `email`, update payloads carry whatever the client chose to change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserFields {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub idade: Option<Number>,
    pub telefone: Option<String>,
    pub cidade: Option<String>,
    pub extra: Map<String, Value>,
}

impl UserFields {
    /// Split a payload into typed fields and the open extension map.
    ///
    /// `id` is dropped because the store owns identity. Callers are expected to
    /// have run the validator first; a known field with the wrong JSON type is
    /// discarded rather than stored.
    pub fn from_payload(payload: Payload) -> Self {
        let mut fields = Self::default();

        for (key, value) in payload {
            match key.as_str() {
                ID => {}
                NOME => fields.nome = into_string(value),
                EMAIL => fields.email = into_string(value),
                IDADE => fields.idade = into_number(value),
                TELEFONE | CIDADE if !value.is_string() => {
                    fields.extra.insert(key, value);
                }
                TELEFONE => fields.telefone = into_string(value),
                CIDADE => fields.cidade = into_string(value),
                _ => {
                    fields.extra.insert(key, value);
                }
            }
        }

        fields
    }
}

fn into_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}

fn into_number(value: Value) -> Option<Number> {
    match value {
        Value::Number(n) => Some(n),
        _ => None,
    }
}
