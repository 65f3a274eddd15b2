use lazy_static::lazy_static;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    /// Built-in English stop words. Callers that want different filtering pass
    /// their own set to [`normalize`]; whatever set is chosen must be the same
    /// one at index build time and at query time.
    pub static ref ENGLISH_STOPWORDS: HashSet<String> = {
        let words: &[&str] = &[
            "a","about","above","after","again","against","all","am","an","and","any","are","aren't","as","at",
            "be","because","been","before","being","below","between","both","but","by",
            "can","can't","cannot","could","couldn't",
            "did","didn't","do","does","doesn't","doing","don't","down","during",
            "each","few","for","from","further",
            "had","hadn't","has","hasn't","have","haven't","having","he","he'd","he'll","he's","her","here","here's","hers","herself","him","himself","his","how","how's",
            "i","i'd","i'll","i'm","i've","if","in","into","is","isn't","it","it's","its","itself",
            "let's","me","more","most","mustn't","my","myself",
            "no","nor","not","of","off","on","once","only","or","other","ought","our","ours","ourselves","out","over","own",
            "same","she","she'd","she'll","she's","should","shouldn't","so","some","such",
            "than","that","that's","the","their","theirs","them","themselves","then","there","there's","these","they","they'd","they'll","they're","they've","this","those","through","to","too",
            "under","until","up","very",
            "was","wasn't","we","we'd","we'll","we're","we've","were","weren't","what","what's","when","when's","where","where's","which","while","who","who's","whom","why","why's","with","won't","would","wouldn't",
            "you","you'd","you'll","you're","you've","your","yours","yourself","yourselves"
        ];
        words.iter().map(|w| w.to_string()).collect()
    };
}

/// Tokenize text into terms using NFKC normalization, lowercasing, whitespace
/// splitting, and stop-word removal. Punctuation stays attached to its token;
/// since the same function runs on documents and on queries, lookups stay
/// consistent either way.
///
/// Tokens come back in input order, duplicates included.
pub fn normalize(text: &str, stopwords: &HashSet<String>) -> Vec<String> {
    let folded = text.nfkc().collect::<String>().to_lowercase();
    folded
        .split_whitespace()
        .filter(|token| !stopwords.contains(*token))
        .map(|token| token.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_normalize() {
        let t = normalize("The Cat SAT on the mat", &ENGLISH_STOPWORDS);
        assert_eq!(t, vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn keeps_duplicates_in_order() {
        let empty = HashSet::new();
        let t = normalize("b a b", &empty);
        assert_eq!(t, vec!["b", "a", "b"]);
    }

    #[test]
    fn custom_stopword_set() {
        let stops: HashSet<String> = ["a"].iter().map(|s| s.to_string()).collect();
        assert_eq!(normalize("a b", &stops), vec!["b"]);
    }

    #[test]
    fn unicode_folding() {
        let empty = HashSet::new();
        // NFKC composes the decomposed e + combining acute
        let t = normalize("Cafe\u{0301}", &empty);
        assert_eq!(t, vec!["caf\u{e9}"]);
    }
}
