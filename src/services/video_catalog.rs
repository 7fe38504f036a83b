// src/services/video_catalog.rs
use rand::Rng;
use rand::seq::SliceRandom;

/// Sample clips, searched in this order.
pub const VIDEO_CATALOG: [(&str, &str); 8] = [
    ("nature", "https://www.w3schools.com/html/mov_bbb.mp4"),
    ("space", "https://media.w3.org/2010/05/sintel/trailer_hd.mp4"),
    ("technology", "https://media.w3.org/2010/05/bunny/movie.mp4"),
    ("ocean", "https://media.w3.org/2010/05/video/movie_300.mp4"),
    ("city", "https://www.w3schools.com/html/movie.mp4"),
    ("animals", "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/flower.mp4"),
    ("sports", "https://media.w3.org/2010/05/sintel/trailer.mp4"),
    ("education", "https://media.w3.org/2010/05/bunny/movie.mp4"),
];

pub fn match_keyword(prompt: &str) -> Option<&'static str> {
    let lower = prompt.to_lowercase();
    VIDEO_CATALOG
        .iter()
        .find(|entry| lower.contains(entry.0))
        .map(|(_, url)| *url)
}

pub fn select_video_url(prompt: &str) -> &'static str {
    select_video_url_with(prompt, &mut rand::thread_rng())
}

pub fn select_video_url_with<R: Rng + ?Sized>(prompt: &str, rng: &mut R) -> &'static str {
    match_keyword(prompt).unwrap_or_else(|| {
        VIDEO_CATALOG
            .choose(rng)
            .map(|(_, url)| *url)
            .unwrap_or(VIDEO_CATALOG[0].1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_is_case_insensitive() {
        assert_eq!(select_video_url("Nature documentary"), VIDEO_CATALOG[0].1);
        assert_eq!(select_video_url("DEEP SPACE"), VIDEO_CATALOG[1].1);
    }

    #[test]
    fn first_keyword_in_table_order_wins() {
        // "city" appears before "space" in the prompt, but space is earlier in the table
        assert_eq!(match_keyword("city in space"), Some(VIDEO_CATALOG[1].1));
    }

    #[test]
    fn unmatched_prompt_picks_from_catalog() {
        let urls: Vec<&str> = VIDEO_CATALOG.iter().map(|(_, u)| *u).collect();
        for _ in 0..32 {
            assert!(urls.contains(&select_video_url("a cat playing piano")));
        }
        assert_eq!(match_keyword("a cat playing piano"), None);
    }
}
