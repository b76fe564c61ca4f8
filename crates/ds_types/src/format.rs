//! Canonical and construct-expression rendering.
//!
//! `Display` is the canonical form: deterministic, and the exact inverse of
//! the datashape grammar for everything the grammar produces. `Debug` is the
//! construct expression used in diagnostics (`ctype("int32")`,
//! `dshape("3 * int32")`, `Fixed(3)`).

use std::fmt;

use crate::{DataShape, Encoding, Mono, Param, Record, StringType, Units};

impl Mono {
    /// Canonical form as a new string.
    pub fn format_type(&self) -> String {
        let mut buf = String::new();
        self.format_type_into(&mut buf);
        buf
    }

    /// Canonical form into an existing buffer.
    pub fn format_type_into(&self, buf: &mut String) {
        match self {
            // Unit measures
            Mono::Null => buf.push_str("null"),
            Mono::Date => buf.push_str("date"),
            Mono::Time(time) => format_zoned_into("time", time.tz(), buf),
            Mono::DateTime(datetime) => format_zoned_into("datetime", datetime.tz(), buf),
            Mono::Units(units) => format_units_into(units, buf),
            Mono::Bytes => buf.push_str("bytes"),
            Mono::String(string) => format_string_into(*string, buf),
            Mono::CType(ct) => buf.push_str(ct.name()),
            Mono::Json => buf.push_str("json"),

            // Constants
            Mono::IntegerConstant(constant) => buf.push_str(&constant.value().to_string()),
            Mono::StringConstant(constant) => quote_into(constant.value(), buf),

            // Dimensions
            Mono::Fixed(fixed) => buf.push_str(&fixed.value().to_string()),
            Mono::Var => buf.push_str("var"),
            Mono::Ellipsis(ellipsis) => {
                if let Some(var) = ellipsis.typevar() {
                    buf.push_str(var.symbol());
                }
                buf.push_str("...");
            }
            Mono::TypeVar(var) => buf.push_str(var.symbol()),

            // Composite
            Mono::DataShape(ds) => format_datashape_into(ds, buf),
            Mono::Record(record) => format_record_into(record, buf),
            Mono::Tuple(tuple) => {
                buf.push('(');
                join_into(tuple.dshapes(), ", ", buf);
                buf.push(')');
            }
            Mono::Function(func) => {
                buf.push('(');
                join_into(func.argtypes(), ", ", buf);
                buf.push_str(") -> ");
                func.restype().format_type_into(buf);
            }
            Mono::Option(option) => {
                buf.push_str("option[");
                option.ty().format_type_into(buf);
                buf.push(']');
            }
            Mono::Implements(implements) => {
                buf.push_str(implements.typevar().symbol());
                buf.push_str(" : ");
                buf.push_str(implements.typeset());
            }
        }
    }

    /// Construct expression into an existing buffer.
    pub fn format_construct_into(&self, buf: &mut String) {
        match self {
            Mono::CType(_) | Mono::String(_) => {
                buf.push_str("ctype(\"");
                escape_into(&self.format_type(), buf);
                buf.push_str("\")");
            }
            Mono::DataShape(_) | Mono::Record(_) | Mono::Tuple(_) => {
                buf.push_str("dshape(\"");
                escape_into(&self.format_type(), buf);
                buf.push_str("\")");
            }
            Mono::Ellipsis(_) => {
                buf.push_str("Ellipsis(\"");
                self.format_type_into(buf);
                buf.push_str("\")");
            }
            Mono::TypeVar(var) => {
                buf.push_str("TypeVar(");
                buf.push_str(var.symbol());
                buf.push(')');
            }
            Mono::Option(_) | Mono::Implements(_) => self.format_type_into(buf),
            _ => {
                buf.push_str(self.tag().name());
                buf.push('(');
                for (i, param) in self.parameters().iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    param.format_construct_into(buf);
                }
                buf.push(')');
            }
        }
    }
}

impl Param {
    /// Construct-expression form of one parameter.
    pub fn format_construct_into(&self, buf: &mut String) {
        match self {
            Param::None => buf.push_str("None"),
            Param::Int(value) => buf.push_str(&value.to_string()),
            Param::Str(value) => quote_into(value, buf),
            Param::Type(ty) => ty.format_construct_into(buf),
            Param::Types(types) => {
                buf.push('[');
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    ty.format_construct_into(buf);
                }
                buf.push(']');
            }
            Param::Fields(fields) => {
                buf.push('[');
                for (i, (name, ty)) in fields.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    buf.push('(');
                    quote_into(name, buf);
                    buf.push_str(", ");
                    ty.format_construct_into(buf);
                    buf.push(')');
                }
                buf.push(']');
            }
        }
    }
}

fn format_zoned_into(keyword: &str, tz: Option<&str>, buf: &mut String) {
    buf.push_str(keyword);
    if let Some(tz) = tz {
        buf.push_str("[tz=");
        quote_into(tz, buf);
        buf.push(']');
    }
}

fn format_units_into(units: &Units, buf: &mut String) {
    buf.push_str("units[");
    quote_into(units.unit(), buf);
    if !units.has_default_tp() {
        buf.push_str(", ");
        units.tp().format_type_into(buf);
    }
    buf.push(']');
}

fn format_string_into(string: StringType, buf: &mut String) {
    buf.push_str("string");
    let encoding = (string.encoding() != Encoding::default()).then_some(string.encoding());
    match (string.fixlen(), encoding) {
        (None, None) => {}
        (Some(fixlen), None) => {
            buf.push('[');
            buf.push_str(&fixlen.to_string());
            buf.push(']');
        }
        (None, Some(encoding)) => {
            buf.push('[');
            quote_into(encoding.canonical(), buf);
            buf.push(']');
        }
        (Some(fixlen), Some(encoding)) => {
            buf.push('[');
            buf.push_str(&fixlen.to_string());
            buf.push(',');
            quote_into(encoding.canonical(), buf);
            buf.push(']');
        }
    }
}

fn format_datashape_into(ds: &DataShape, buf: &mut String) {
    match ds.name() {
        Some(name) => buf.push_str(name),
        None => join_into(ds.parameters(), " * ", buf),
    }
}

fn format_record_into(record: &Record, buf: &mut String) {
    if record.is_empty() {
        buf.push_str("{}");
        return;
    }
    buf.push_str("{ ");
    for (i, (name, ty)) in record.fields().enumerate() {
        if i > 0 {
            buf.push_str(", ");
        }
        buf.push_str(name);
        buf.push_str(" : ");
        ty.format_type_into(buf);
    }
    buf.push_str(" }");
}

fn join_into(types: &[Mono], sep: &str, buf: &mut String) {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            buf.push_str(sep);
        }
        ty.format_type_into(buf);
    }
}

/// Single-quoted literal with `\` and `'` escaped.
fn quote_into(value: &str, buf: &mut String) {
    buf.push('\'');
    for ch in value.chars() {
        if matches!(ch, '\\' | '\'') {
            buf.push('\\');
        }
        buf.push(ch);
    }
    buf.push('\'');
}

/// Escape control and non-ASCII characters so the result is printable ASCII.
fn escape_into(value: &str, buf: &mut String) {
    for ch in value.chars() {
        match ch {
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            ' '..='~' => buf.push(ch),
            _ => {
                let code = u32::from(ch);
                let escaped = if code < 0x100 {
                    format!("\\x{code:02x}")
                } else if code < 0x1_0000 {
                    format!("\\u{code:04x}")
                } else {
                    format!("\\U{code:08x}")
                };
                buf.push_str(&escaped);
            }
        }
    }
}

impl fmt::Display for Mono {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_type())
    }
}

impl fmt::Debug for Mono {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.format_construct_into(&mut buf);
        f.write_str(&buf)
    }
}

impl fmt::Display for DataShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        format_datashape_into(self, &mut buf);
        f.write_str(&buf)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        format_record_into(self, &mut buf);
        f.write_str(&buf)
    }
}
