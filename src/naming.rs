//! Model name synthesis from a resource's position in the tree.
//!
//! Names are built from the parent uid and the route name, camelized into a
//! type-style identifier, then singularized with English inflection rules.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Separator between ancestor route names in a uid.
pub const UID_SEPARATOR: char = ':';

/// Words that have no distinct singular form.
const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "fish",
    "information",
    "jeans",
    "money",
    "rice",
    "series",
    "sheep",
    "species",
];

/// Irregular (singular, plural) pairs, checked before the regular rules.
const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("human", "humans"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("zombie", "zombies"),
];

/// Regular singularization rules; the first match wins.
const SINGULAR_RULES: &[(&str, &str)] = &[
    (r"(?i)(database)s$", "${1}"),
    (r"(?i)(quiz)zes$", "${1}"),
    (r"(?i)(matr)ices$", "${1}ix"),
    (r"(?i)(vert|ind)ices$", "${1}ex"),
    (r"(?i)(passer)sby$", "${1}by"),
    (r"(?i)^(ox)en", "${1}"),
    (r"(?i)(alias|status)(es)?$", "${1}"),
    (r"(?i)(octop|vir)(us|i)$", "${1}us"),
    (r"(?i)^(a)x[ie]s$", "${1}xis"),
    (r"(?i)(cris|test)(is|es)$", "${1}is"),
    (r"(?i)(shoe)s$", "${1}"),
    (r"(?i)(o)es$", "${1}"),
    (r"(?i)(bus)(es)?$", "${1}"),
    (r"(?i)(m|l)ice$", "${1}ouse"),
    (r"(?i)(x|ch|ss|sh)es$", "${1}"),
    (r"(?i)(m)ovies$", "${1}ovie"),
    (r"(?i)(s)eries$", "${1}eries"),
    (r"(?i)([^aeiouy]|qu)ies$", "${1}y"),
    (r"(?i)([lr])ves$", "${1}f"),
    (r"(?i)(tive)s$", "${1}"),
    (r"(?i)(hive)s$", "${1}"),
    (r"(?i)([^f])ves$", "${1}fe"),
    (r"(?i)(t)he(sis|ses)$", "${1}hesis"),
    (r"(?i)(s)ynop(sis|ses)$", "${1}ynopsis"),
    (r"(?i)(p)rogno(sis|ses)$", "${1}rognosis"),
    (r"(?i)(p)arenthe(sis|ses)$", "${1}arenthesis"),
    (r"(?i)(d)iagno(sis|ses)$", "${1}iagnosis"),
    (r"(?i)(b)a(sis|ses)$", "${1}asis"),
    (r"(?i)(a)naly(sis|ses)$", "${1}nalysis"),
    (r"(?i)([ti])a$", "${1}um"),
    (r"(?i)(n)ews$", "${1}ews"),
    (r"(?i)(ss)$", "${1}"),
    (r"(?i)s$", ""),
];

static UNCOUNTABLE_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    UNCOUNTABLES
        .iter()
        .map(|word| compile(&format!(r"(?i)\b({word})\z")))
        .collect()
});

// Irregulars keep the caller's casing of the first letter, so "People" and
// "SalesPeople" both map onto "...Person".
static SINGULAR_RES: Lazy<Vec<(Regex, String)>> = Lazy::new(|| {
    let mut rules = Vec::with_capacity(IRREGULARS.len() * 2 + SINGULAR_RULES.len());
    for (singular, plural) in IRREGULARS {
        let (head, singular_tail) = singular.split_at(1);
        let plural_tail = &plural[1..];
        rules.push((
            compile(&format!("(?i)({head}){singular_tail}$")),
            format!("${{1}}{singular_tail}"),
        ));
        rules.push((
            compile(&format!("(?i)({head}){plural_tail}$")),
            format!("${{1}}{singular_tail}"),
        ));
    }
    for (pattern, replacement) in SINGULAR_RULES {
        rules.push((compile(pattern), (*replacement).to_string()));
    }
    rules
});

static CAMELIZE_RE: Lazy<Regex> = Lazy::new(|| compile(r"(?:^|_)(.)"));

// Patterns are compile-time constants; a failure here is a bug in the tables.
fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("invalid inflection pattern {pattern:?}: {e}"),
    }
}

/// Convert an underscore-separated string to UpperCamelCase.
///
/// The first character and every character following `_` are uppercased and
/// the underscores consumed. Everything else is left as is, so
/// `"users_APIKeys"` becomes `"UsersAPIKeys"`.
pub fn camelize(s: &str) -> String {
    CAMELIZE_RE
        .replace_all(s, |caps: &Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Singularize the last word of `word` using English inflection heuristics.
///
/// Already-singular and unknown words are usually returned unchanged; this is
/// best effort and never fails.
pub fn singularize(word: &str) -> String {
    if UNCOUNTABLE_RES.iter().any(|re| re.is_match(word)) {
        return word.to_string();
    }

    SINGULAR_RES
        .iter()
        .find(|(re, _)| re.is_match(word))
        .map(|(re, replacement)| re.replace(word, replacement.as_str()).into_owned())
        .unwrap_or_else(|| word.to_string())
}

/// Qualified uid of `route_name` below `parent_uid`.
pub fn child_uid(parent_uid: &str, route_name: &str) -> String {
    if parent_uid.is_empty() {
        route_name.to_string()
    } else {
        format!("{parent_uid}{UID_SEPARATOR}{route_name}")
    }
}

/// Name of the model backing the resource `route_name` under `parent_uid`.
///
/// # Example
///
/// ```
/// use raml_views::model_name;
///
/// assert_eq!(model_name("", "users"), "User");
/// assert_eq!(model_name("users", "comments"), "UsersComment");
/// ```
pub fn model_name(parent_uid: &str, route_name: &str) -> String {
    let uid = child_uid(parent_uid, route_name).replace(UID_SEPARATOR, "_");
    singularize(&camelize(&uid))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camelize_underscored() {
        assert_eq!(camelize("users"), "Users");
        assert_eq!(camelize("users_comments"), "UsersComments");
        assert_eq!(camelize("a_b_c"), "ABC");
        assert_eq!(camelize(""), "");
    }

    #[test]
    fn camelize_preserves_inner_case() {
        assert_eq!(camelize("users_APIKeys"), "UsersAPIKeys");
        assert_eq!(camelize("userProfiles"), "UserProfiles");
        assert_eq!(camelize("user-profiles"), "User-profiles");
    }

    #[test]
    fn singularize_regular_plurals() {
        assert_eq!(singularize("Users"), "User");
        assert_eq!(singularize("Categories"), "Category");
        assert_eq!(singularize("Boxes"), "Box");
        assert_eq!(singularize("Wolves"), "Wolf");
        assert_eq!(singularize("Knives"), "Knife");
        assert_eq!(singularize("Statuses"), "Status");
        assert_eq!(singularize("Analyses"), "Analysis");
        assert_eq!(singularize("Movies"), "Movie");
        assert_eq!(singularize("Mice"), "Mouse");
        assert_eq!(singularize("Databases"), "Database");
    }

    #[test]
    fn singularize_irregulars_keep_leading_case() {
        assert_eq!(singularize("People"), "Person");
        assert_eq!(singularize("people"), "person");
        assert_eq!(singularize("SalesPeople"), "SalesPerson");
        assert_eq!(singularize("Children"), "Child");
        assert_eq!(singularize("Person"), "Person");
    }

    #[test]
    fn singularize_leaves_singular_and_uncountable_words() {
        assert_eq!(singularize("User"), "User");
        assert_eq!(singularize("Status"), "Status");
        assert_eq!(singularize("Address"), "Address");
        assert_eq!(singularize("Sheep"), "Sheep");
        assert_eq!(singularize("Series"), "Series");
        assert_eq!(singularize("News"), "News");
        assert_eq!(singularize(""), "");
    }

    #[test]
    fn singularize_only_touches_last_word() {
        assert_eq!(singularize("UsersComments"), "UsersComment");
        assert_eq!(singularize("StoriesCategories"), "StoriesCategory");
    }

    #[test]
    fn child_uid_chains_with_colon() {
        assert_eq!(child_uid("", "users"), "users");
        assert_eq!(child_uid("users", "comments"), "users:comments");
        assert_eq!(child_uid("a:b", "c"), "a:b:c");
    }

    #[test]
    fn model_name_at_root() {
        assert_eq!(model_name("", "users"), "User");
        assert_eq!(model_name("", "comments"), "Comment");
        assert_eq!(model_name("", "categories"), "Category");
    }

    #[test]
    fn model_name_nested() {
        assert_eq!(model_name("users", "comments"), "UsersComment");
        assert_eq!(model_name("users:comments", "likes"), "UsersCommentsLike");
        assert_eq!(model_name("stories", "profile"), "StoriesProfile");
    }

    #[test]
    fn model_name_is_deterministic() {
        assert_eq!(
            model_name("blog:posts", "tags"),
            model_name("blog:posts", "tags")
        );
    }
}
