use std::collections::HashMap;

/// Decode one `application/x-www-form-urlencoded` component.
///
/// Escapes that don't form valid UTF-8 become U+FFFD rather than failing.
fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Split an encoded string into decoded key/value pairs, in order.
///
/// Pairs with an empty value are dropped, as are empty segments, so
/// `a=&b=1&&` yields only `b`. A segment without `=` is dropped too.
pub fn parse_pairs(input: &str) -> Vec<(String, String)> {
    input
        .split('&')
        .filter_map(|segment| segment.split_once('='))
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| (decode_component(key), decode_component(value)))
        .collect()
}

/// Decoded form fields keyed by name; the first occurrence of a key wins.
#[derive(Debug, Default)]
pub struct FormFields {
    fields: HashMap<String, String>,
}

impl FormFields {
    pub fn parse(input: &str) -> Self {
        parse_pairs(input).into_iter().collect()
    }

    pub fn take(&mut self, key: &str) -> Option<String> {
        self.fields.remove(key)
    }
}

impl FromIterator<(String, String)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut fields = HashMap::new();
        for (key, value) in iter {
            fields.entry(key).or_insert(value);
        }
        Self { fields }
    }
}
