use crate::domain::catalog::services::SlugGenerator;
use slug::slugify;

/// Transliterating slugifier ("Educación Básica" -> "educacion-basica").
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_diacritics() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("Educación Básica"), "educacion-basica");
        assert_eq!(slugger.slugify("Hola Mundo!"), "hola-mundo");
    }

    #[test]
    fn collapses_separators() {
        let slugger = DefaultSlugGenerator;
        assert_eq!(slugger.slugify("  a -- b __ c  "), "a-b-c");
    }
}
