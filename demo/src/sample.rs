//! A capability document of the shape the server returns on connect.
//!
//! Used when no `--doc` file is given.

use serde_json::{json, Value};

pub fn connect_document() -> Value {
    json!({
        "@context": {
            "doc": "http://localhost:6363/terminus/document/",
            "rdfs": "http://www.w3.org/2000/01/rdf-schema#",
            "terminus": "http://terminusdb.com/schema/terminus#"
        },
        "@id": "doc:admin",
        "@type": "terminus:User",
        "rdfs:label": {"@language": "en", "@value": "Server Admin User"},
        "terminus:authority": [
            {
                "@id": "doc:access_all_areas",
                "@type": "terminus:ServerCapability",
                "terminus:access": {
                    "@id": "doc:server_access",
                    "@type": "terminus:Access",
                    "terminus:action": [
                        {"@id": "terminus:create_database"},
                        {"@id": "terminus:delete_database"},
                        {"@id": "terminus:class_frame"}
                    ],
                    "terminus:authority_scope": {
                        "@id": "doc:server",
                        "@type": "terminus:Server",
                        "rdfs:comment": [{"@language": "en", "@value": "The current Database Server itself"}],
                        "rdfs:label": [{"@language": "en", "@value": "The DB server"}],
                        "terminus:resource_name": {"@type": "xsd:string", "@value": "terminus"}
                    }
                }
            },
            {
                "@id": "doc:acme_access",
                "@type": "terminus:DatabaseCapability",
                "terminus:access": {
                    "@id": "doc:acme_rw",
                    "@type": "terminus:Access",
                    "terminus:action": [
                        {"@id": "terminus:woql_select"},
                        {"@id": "terminus:woql_update"},
                        {"@id": "terminus:get_schema"},
                        {"@id": "terminus:create_document"},
                        {"@id": "terminus:get_document"}
                    ],
                    "terminus:authority_scope": [
                        {
                            "@id": "doc:inventory",
                            "@type": "terminus:Database",
                            "rdfs:label": [{"@language": "en", "@value": "Warehouse inventory"}],
                            "terminus:resource_name": {"@type": "xsd:string", "@value": "acme|inventory"}
                        },
                        {
                            "@id": "doc:orders",
                            "@type": "terminus:Database",
                            "rdfs:label": [{"@language": "en", "@value": "Customer orders"}],
                            "terminus:resource_name": {"@type": "xsd:string", "@value": "acme|orders"}
                        }
                    ]
                }
            },
            {
                "@id": "doc:audit_access",
                "@type": "terminus:DatabaseCapability",
                "terminus:access": {
                    "@id": "doc:audit_ro",
                    "@type": "terminus:Access",
                    "terminus:action": {"@id": "terminus:woql_select"},
                    "terminus:authority_scope": {
                        "@id": "doc:ledger",
                        "@type": "terminus:Database",
                        "rdfs:label": {"@language": "en", "@value": "unused"},
                        "rdfs:comment": {"@language": "en", "@value": "Read-only ledger"},
                        "terminus:resource_name": {"@type": "xsd:string", "@value": "audit|ledger"}
                    }
                }
            }
        ]
    })
}
