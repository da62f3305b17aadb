//! Basic usage of the diskurso API

use diskurso_api::{analyze_text, Analyzer, Classification, Config, FnClassifier, Sentiment};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Convenience function with the builtin tables and classifier
    println!("=== Method 1: Convenience Function ===");
    let report = analyze_text("Masaya ako kanina, pero pagod na ako. I liked the food but the line was long.")?;

    for (i, sentence) in report.sentences.iter().enumerate() {
        println!("  Sentence {}: {}", i + 1, sentence.text);
        for clause in &sentence.clauses {
            println!("    [{}] {}", clause.sentiment.label, clause.text);
        }
    }
    println!(
        "Overall: {}\n",
        report.overall.as_deref().unwrap_or("no verdict")
    );

    // Method 2: Custom configuration
    println!("=== Method 2: Custom Configuration ===");
    let config = Config::builder().terminators(['.', '!', '?']).build()?;
    let analyzer = Analyzer::with_config(config)?;
    let report = analyzer.analyze_text("Grabe ang init! Pero sulit naman ang biyahe.")?;
    println!("Found {} sentences", report.sentences.len());

    // Method 3: Plugging in another classifier
    println!("\n=== Method 3: Custom Classifier ===");
    let classifier = FnClassifier::new(|text: &str| {
        let label = if text.contains('!') {
            Sentiment::Positive
        } else {
            Sentiment::Neutral
        };
        Ok(Classification::certain(label))
    });
    let analyzer = Analyzer::with_classifier(Config::default(), classifier)?;
    let report = analyzer.analyze_text("Kumain kami, at umuwi agad.")?;
    println!("Votes: {:?}", report.votes);

    Ok(())
}
