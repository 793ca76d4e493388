//! Record schema registry
//!
//! One static field table per [`RecordKind`]. The table is the single source
//! of truth for wire key names, the number of positional arguments a kind
//! takes, the value that the value filter matches against, and the column
//! order of the inline report.

use crate::types::{FieldSpec, RecordKind};

/// Columns that precede every schema's own fields in the inline report.
pub const LEADING_COLUMNS: [&str; 3] = ["domain", "hashId", "type"];

/// Field table of one record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    pub kind: RecordKind,
    /// Fields in argument and column order.
    pub fields: &'static [FieldSpec],
    /// Wire key of the value the value filter applies to.
    pub primary: &'static str,
}

impl RecordSchema {
    /// Number of positional arguments after the record type.
    pub const fn arity(&self) -> usize {
        self.fields.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.key)
    }

    /// Full inline report header: leading columns, then the fields.
    pub fn columns(&self) -> Vec<&'static str> {
        LEADING_COLUMNS.iter().copied().chain(self.keys()).collect()
    }

    /// Argument shape for help output, e.g. `A <name> <ttl> <ip>`.
    pub fn usage(&self) -> String {
        let mut line = self.kind.as_str().to_string();
        for key in self.keys() {
            line.push_str(" <");
            line.push_str(key);
            line.push('>');
        }
        line
    }
}

const NAME: FieldSpec = FieldSpec::string("name");
const TTL: FieldSpec = FieldSpec::integer("ttl");

static A: RecordSchema = RecordSchema {
    kind: RecordKind::A,
    fields: &[NAME, TTL, FieldSpec::string("ip")],
    primary: "ip",
};

static AAAA: RecordSchema = RecordSchema {
    kind: RecordKind::Aaaa,
    fields: &[NAME, TTL, FieldSpec::string("ip")],
    primary: "ip",
};

static CNAME: RecordSchema = RecordSchema {
    kind: RecordKind::Cname,
    fields: &[NAME, TTL, FieldSpec::string("alias")],
    primary: "alias",
};

static TXT: RecordSchema = RecordSchema {
    kind: RecordKind::Txt,
    fields: &[NAME, TTL, FieldSpec::string("text")],
    primary: "text",
};

static NS: RecordSchema = RecordSchema {
    kind: RecordKind::Ns,
    fields: &[NAME, TTL, FieldSpec::string("nameServer")],
    primary: "nameServer",
};

// The API carries the SSHFP fingerprint under `text`.
static SSHFP: RecordSchema = RecordSchema {
    kind: RecordKind::Sshfp,
    fields: &[
        NAME,
        TTL,
        FieldSpec::integer("algorithm"),
        FieldSpec::integer("fingerprintType"),
        FieldSpec::string("text"),
    ],
    primary: "text",
};

static SRV: RecordSchema = RecordSchema {
    kind: RecordKind::Srv,
    fields: &[
        NAME,
        TTL,
        FieldSpec::integer("priority"),
        FieldSpec::integer("weight"),
        FieldSpec::integer("port"),
        FieldSpec::string("target"),
    ],
    primary: "target",
};

static TLSA: RecordSchema = RecordSchema {
    kind: RecordKind::Tlsa,
    fields: &[
        NAME,
        TTL,
        FieldSpec::integer("certificateUsage"),
        FieldSpec::integer("selector"),
        FieldSpec::integer("matchingType"),
        FieldSpec::string("hash"),
    ],
    primary: "hash",
};

static CAA: RecordSchema = RecordSchema {
    kind: RecordKind::Caa,
    fields: &[
        NAME,
        TTL,
        FieldSpec::integer("flags"),
        FieldSpec::string("tag"),
        FieldSpec::string("caaValue"),
    ],
    primary: "caaValue",
};

static MX: RecordSchema = RecordSchema {
    kind: RecordKind::Mx,
    fields: &[
        NAME,
        TTL,
        FieldSpec::integer("priority"),
        FieldSpec::string("mailserver"),
    ],
    primary: "mailserver",
};

/// Schema of `kind`. Total over [`RecordKind`].
pub fn lookup(kind: RecordKind) -> &'static RecordSchema {
    match kind {
        RecordKind::A => &A,
        RecordKind::Aaaa => &AAAA,
        RecordKind::Cname => &CNAME,
        RecordKind::Txt => &TXT,
        RecordKind::Ns => &NS,
        RecordKind::Sshfp => &SSHFP,
        RecordKind::Srv => &SRV,
        RecordKind::Tlsa => &TLSA,
        RecordKind::Caa => &CAA,
        RecordKind::Mx => &MX,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldKind;

    #[test]
    fn lookup_returns_matching_kind() {
        for kind in RecordKind::ALL {
            assert_eq!(lookup(kind).kind, kind);
        }
    }

    #[test]
    fn arity_per_kind() {
        let expected = [
            (RecordKind::A, 3),
            (RecordKind::Aaaa, 3),
            (RecordKind::Cname, 3),
            (RecordKind::Txt, 3),
            (RecordKind::Ns, 3),
            (RecordKind::Sshfp, 5),
            (RecordKind::Srv, 6),
            (RecordKind::Tlsa, 6),
            (RecordKind::Caa, 5),
            (RecordKind::Mx, 4),
        ];
        for (kind, arity) in expected {
            assert_eq!(lookup(kind).arity(), arity, "arity of {kind}");
        }
    }

    #[test]
    fn every_schema_starts_with_name_and_ttl() {
        for kind in RecordKind::ALL {
            let keys: Vec<_> = lookup(kind).keys().collect();
            assert_eq!(&keys[..2], &["name", "ttl"], "{kind}");
        }
    }

    #[test]
    fn primary_key_is_a_string_field() {
        for kind in RecordKind::ALL {
            let schema = lookup(kind);
            let primary = schema.fields.iter().find(|f| f.key == schema.primary);
            assert!(
                matches!(primary, Some(f) if f.kind == FieldKind::String),
                "{kind} primary {}",
                schema.primary
            );
        }
    }

    #[test]
    fn keys_are_unique_within_schema() {
        for kind in RecordKind::ALL {
            let mut keys: Vec<_> = lookup(kind).keys().collect();
            let before = keys.len();
            keys.sort_unstable();
            keys.dedup();
            assert_eq!(keys.len(), before, "{kind}");
        }
    }

    #[test]
    fn numeric_keys_match_declared_set() {
        let numeric = [
            "ttl",
            "priority",
            "weight",
            "port",
            "flags",
            "algorithm",
            "fingerprintType",
            "certificateUsage",
            "selector",
            "matchingType",
        ];
        for kind in RecordKind::ALL {
            for field in lookup(kind).fields {
                assert_eq!(
                    field.kind == FieldKind::Integer,
                    numeric.contains(&field.key),
                    "{kind}.{}",
                    field.key
                );
            }
        }
    }

    #[test]
    fn columns_prefix_leading_columns() {
        assert_eq!(
            lookup(RecordKind::Mx).columns(),
            vec!["domain", "hashId", "type", "name", "ttl", "priority", "mailserver"]
        );
    }

    #[test]
    fn usage_line() {
        assert_eq!(
            lookup(RecordKind::Srv).usage(),
            "SRV <name> <ttl> <priority> <weight> <port> <target>"
        );
    }
}
