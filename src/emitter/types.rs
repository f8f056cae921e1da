use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Source type names to Python annotations.
    pub static ref TYPE_LOOKUP: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("entero", "int");
        map.insert("flotante", "float");
        map.insert("texto", "str");
        map.insert("booleano", "bool");
        map
    };

    /// Builtin functions with a different name in Python.
    pub static ref BUILTIN_LOOKUP: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();
        map.insert("imprimir", "print");
        map
    };
}

pub fn target_type(data_type: &str) -> &str {
    TYPE_LOOKUP.get(data_type).copied().unwrap_or(data_type)
}

pub fn target_builtin(identifier: &str) -> &str {
    BUILTIN_LOOKUP.get(identifier).copied().unwrap_or(identifier)
}
