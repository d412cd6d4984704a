use crate::card::{Card, ImageUris};

/// Shown for cards that carry no usable image
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/146x204";

fn best_of(uris: Option<&ImageUris>) -> Option<&str> {
    uris?
        .by_preference()
        .into_iter()
        .flatten()
        .find(|uri| !uri.is_empty())
}

/// Pick the best available image for a card.
///
/// The card's own variants win; a card without any falls back to its faces
/// in printed order. Faces never nest, so this looks at most one level down.
pub fn resolve_image(card: &Card) -> Option<&str> {
    best_of(card.image_uris.as_ref()).or_else(|| {
        card.faces()
            .iter()
            .find_map(|face| best_of(face.image_uris.as_ref()))
    })
}

/// Same as [`resolve_image`], substituting `placeholder` when nothing resolves
pub fn image_or<'a>(card: &'a Card, placeholder: &'a str) -> &'a str {
    resolve_image(card).unwrap_or(placeholder)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardFace;

    fn uris(f: impl FnOnce(&mut ImageUris)) -> Option<ImageUris> {
        let mut u = ImageUris::default();
        f(&mut u);
        Some(u)
    }

    #[test]
    fn test_small_preferred_over_everything() {
        let card = Card {
            image_uris: uris(|u| {
                u.border_crop = Some("border".into());
                u.normal = Some("normal".into());
                u.small = Some("small".into());
            }),
            ..Card::default()
        };
        assert_eq!(resolve_image(&card), Some("small"));
    }

    #[test]
    fn test_png_beats_large() {
        let card = Card {
            image_uris: uris(|u| {
                u.large = Some("large".into());
                u.png = Some("png".into());
            }),
            ..Card::default()
        };
        assert_eq!(resolve_image(&card), Some("png"));
    }

    #[test]
    fn test_art_crop_only() {
        let card = Card {
            image_uris: uris(|u| u.art_crop = Some("art".into())),
            ..Card::default()
        };
        assert_eq!(resolve_image(&card), Some("art"));
    }

    #[test]
    fn test_empty_strings_are_skipped() {
        let card = Card {
            image_uris: uris(|u| {
                u.small = Some(String::new());
                u.normal = Some("normal".into());
            }),
            ..Card::default()
        };
        assert_eq!(resolve_image(&card), Some("normal"));
    }

    #[test]
    fn test_no_images_no_faces() {
        let card = Card::default();
        assert_eq!(resolve_image(&card), None);
        assert_eq!(image_or(&card, PLACEHOLDER_IMAGE), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_falls_back_to_first_face_with_image() {
        let card = Card {
            image_uris: Some(ImageUris::default()),
            card_faces: Some(vec![
                CardFace {
                    name: "Front".into(),
                    ..CardFace::default()
                },
                CardFace {
                    name: "Back".into(),
                    image_uris: uris(|u| u.large = Some("back-large".into())),
                    ..CardFace::default()
                },
            ]),
            ..Card::default()
        };
        assert_eq!(resolve_image(&card), Some("back-large"));
    }

    #[test]
    fn test_faces_without_images() {
        let card = Card {
            card_faces: Some(vec![CardFace::default(), CardFace::default()]),
            ..Card::default()
        };
        assert_eq!(resolve_image(&card), None);
    }

    #[test]
    fn test_resolution_is_stable() {
        let card = Card {
            image_uris: uris(|u| u.normal = Some("normal".into())),
            ..Card::default()
        };
        assert_eq!(resolve_image(&card), resolve_image(&card.clone()));
    }
}
