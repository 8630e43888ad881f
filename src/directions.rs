use std::collections::HashMap;

lazy_static! {
    /// Exit direction keyword -> DOT compass port suffix.
    pub static ref PORTS: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("n", ":n");
        m.insert("north", ":n");
        m.insert("s", ":s");
        m.insert("south", ":s");
        m.insert("e", ":e");
        m.insert("east", ":e");
        m.insert("w", ":w");
        m.insert("west", ":w");
        m.insert("se", ":se");
        m.insert("southeast", ":se");
        m.insert("sw", ":sw");
        m.insert("southwest", ":sw");
        m.insert("ne", ":ne");
        m.insert("northeast", ":ne");
        m.insert("nw", ":nw");
        m.insert("northwest", ":nw");
        m
    };
}

/// Port suffix for `direction`, empty when the direction has no compass point.
pub fn port_for(direction: &str) -> &'static str {
    PORTS.get(direction).copied().unwrap_or("")
}
