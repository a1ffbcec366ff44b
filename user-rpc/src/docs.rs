// OpenAPI description of the users API, served at /api/v1/docs

use serde_json::{json, Value};

pub fn openapi_document() -> Value {
    let id_param = json!({
        "name": "id",
        "in": "path",
        "required": true,
        "description": "Positive integer identifier; anything else is treated as not found",
        "schema": { "type": "string" }
    });
    let not_found = json!({
        "description": "Record not found",
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ErrorResponse" } } }
    });
    let invalid = json!({
        "description": "Invalid data",
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/ValidationErrorResponse" } } }
    });
    let user = json!({
        "content": { "application/json": { "schema": { "$ref": "#/components/schemas/User" } } }
    });

    json!({
        "openapi": "3.0.3",
        "info": {
            "title": "Users API",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "CRUD over an in-memory collection of user records"
        },
        "paths": {
            "/api/v1/users": {
                "get": {
                    "summary": "List all users in insertion order",
                    "responses": {
                        "200": {
                            "description": "All users",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/UserList" } } }
                        }
                    }
                },
                "post": {
                    "summary": "Create a user",
                    "requestBody": { "required": true, "content": user["content"].clone() },
                    "responses": {
                        "201": { "description": "Created user", "content": user["content"].clone() },
                        "400": invalid.clone()
                    }
                }
            },
            "/api/v1/users/{id}": {
                "parameters": [id_param],
                "get": {
                    "summary": "Fetch a user",
                    "responses": {
                        "200": { "description": "The user", "content": user["content"].clone() },
                        "404": not_found.clone()
                    }
                },
                "put": {
                    "summary": "Update the fields present in the body",
                    "requestBody": { "required": true, "content": user["content"].clone() },
                    "responses": {
                        "200": { "description": "Merged user", "content": user["content"].clone() },
                        "400": invalid,
                        "404": not_found.clone()
                    }
                },
                "delete": {
                    "summary": "Remove a user",
                    "responses": {
                        "200": {
                            "description": "Removed",
                            "content": { "application/json": { "schema": { "$ref": "#/components/schemas/Message" } } }
                        },
                        "404": not_found
                    }
                }
            }
        },
        "components": {
            "schemas": {
                "User": {
                    "type": "object",
                    "required": ["nome", "email"],
                    "additionalProperties": true,
                    "properties": {
                        "id": { "type": "integer", "minimum": 1, "readOnly": true },
                        "nome": { "type": "string", "minLength": 1 },
                        "email": { "type": "string", "format": "email" },
                        "idade": { "type": "number", "minimum": 0, "maximum": 120 },
                        "telefone": { "type": "string" },
                        "cidade": { "type": "string" }
                    }
                },
                "UserList": {
                    "type": "object",
                    "properties": {
                        "count": { "type": "integer" },
                        "data": { "type": "array", "items": { "$ref": "#/components/schemas/User" } }
                    }
                },
                "Message": {
                    "type": "object",
                    "properties": { "message": { "type": "string" } }
                },
                "ErrorResponse": {
                    "type": "object",
                    "properties": { "error": { "type": "string" } }
                },
                "ValidationErrorResponse": {
                    "type": "object",
                    "properties": {
                        "error": { "type": "string" },
                        "details": { "type": "array", "items": { "type": "string" } }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = openapi_document();
        let paths = doc["paths"].as_object().unwrap();

        assert!(paths["/api/v1/users"].get("get").is_some());
        assert!(paths["/api/v1/users"].get("post").is_some());
        for method in ["get", "put", "delete"] {
            assert!(paths["/api/v1/users/{id}"].get(method).is_some(), "{method}");
        }
        assert_eq!(doc["components"]["schemas"]["User"]["required"], json!(["nome", "email"]));
    }
}
