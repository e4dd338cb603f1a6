//! Typography selection from the font catalog.

use crate::brand::model::NormalizedBrand;
use crate::catalog::{Archetype, Audience, Catalog, FontEntry};
use crate::error::{BrandkitError, BrandkitResult};

use super::model::Typography;

/// Pick a font for the brand's archetype and audience.
///
/// An exact archetype+audience pairing wins over an archetype-wide one; when
/// neither exists the catalog's default entry is used.
pub fn select(brand: &NormalizedBrand, catalog: &Catalog) -> BrandkitResult<Typography> {
    let exact = (brand.archetype, Some(brand.audience));
    let broad = (brand.archetype, None);

    let entry = find(catalog, |p| *p == exact)
        .or_else(|| find(catalog, |p| *p == broad))
        .or_else(|| {
            tracing::warn!(archetype = %brand.archetype, "No font pairing, using catalog default");
            catalog.default_font()
        })
        .ok_or_else(|| BrandkitError::internal("font catalog is empty"))?;

    Ok(Typography {
        family: entry.family.to_string(),
        import_url: entry.import_url(),
    })
}

fn find<F>(catalog: &Catalog, matches: F) -> Option<&FontEntry>
where
    F: Fn(&(Archetype, Option<Audience>)) -> bool,
{
    catalog.fonts.iter().find(|f| f.pairings.iter().any(&matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brand::{model::BrandInput, normalize};

    fn typography(audience: &str, sector: &str) -> Typography {
        let input = BrandInput::new("Acme", "Build things", "quality", audience, sector);
        let brand = normalize(&input, Catalog::builtin()).unwrap();
        select(&brand, Catalog::builtin()).unwrap()
    }

    #[test]
    fn test_archetype_font() {
        assert_eq!(typography("everyone", "fintech").family, "Roboto");
        assert_eq!(typography("everyone", "luxury fashion").family, "Playfair Display");
    }

    #[test]
    fn test_audience_refines_choice() {
        assert_eq!(typography("enterprise teams", "fintech").family, "IBM Plex Sans");
        assert_eq!(typography("gen z gamers", "e-commerce").family, "Poppins");
    }

    #[test]
    fn test_family_is_catalogued_and_url_matches() {
        let catalog = Catalog::builtin();
        for sector in ["fintech", "school", "shop", "clinic", "cloud", "beauty", "zzz"] {
            for audience in ["students", "executives", "pets"] {
                let t = typography(audience, sector);
                assert!(catalog.contains_font(&t.family));
                let encoded = t.family.replace(' ', "+");
                assert!(t.import_url.starts_with("https://fonts.googleapis.com/css2?"));
                assert!(t.import_url.contains(&format!("family={}:", encoded)));
            }
        }
    }

    #[test]
    fn test_missing_pairing_falls_back_to_default() {
        let mut catalog = Catalog::builtin().clone();
        catalog.fonts.retain(|f| f.pairings.iter().all(|(a, _)| *a != Archetype::Generic));
        let input = BrandInput::new("Acme", "Build", "quality", "everyone", "quantum-widgetry");
        let brand = normalize(&input, &catalog).unwrap();
        let t = select(&brand, &catalog).unwrap();
        assert_eq!(t.family, catalog.default_font().unwrap().family);
    }

    #[test]
    fn test_empty_catalog_is_internal_error() {
        let mut catalog = Catalog::builtin().clone();
        catalog.fonts.clear();
        let input = BrandInput::new("Acme", "Build", "quality", "everyone", "fintech");
        let brand = normalize(&input, &catalog).unwrap();
        assert!(matches!(
            select(&brand, &catalog),
            Err(BrandkitError::InternalGeneration(_))
        ));
    }
}
