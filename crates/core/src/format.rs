use crate::types::{AnalysisReport, SentimentLabel, Transcript};

/// Format seconds as MM:SS timestamp
pub fn format_timestamp(seconds: f64) -> String {
    let mins = (seconds / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    format!("{:02}:{:02}", mins, secs)
}

/// Format transcript segments with timestamps
pub fn format_transcript_with_timestamps(transcript: &Transcript) -> String {
    transcript
        .segments
        .iter()
        .map(|seg| format!("[{}] {}", format_timestamp(seg.start), seg.text.trim()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn sentiment_label_name(label: SentimentLabel) -> &'static str {
    match label {
        SentimentLabel::Positive => "positive",
        SentimentLabel::Neutral => "neutral",
        SentimentLabel::Negative => "negative",
    }
}

/// Format an analysis report as human-readable markdown
pub fn format_report_readable(report: &AnalysisReport) -> String {
    let mut output = String::new();

    // Title
    output.push_str(&format!("# Interview Report — {} round\n\n", report.round.name()));

    // Scores
    output.push_str(&format!(
        "**Overall:** {}/100 | **Confidence:** {}/100 | **Tone:** {}\n\n",
        report.score.overall,
        report.score.confidence,
        report.score.tone.name()
    ));

    // Meta info
    output.push_str(&format!(
        "**Duration:** {} | **Words:** {} | **Pace:** {:.0} WPM\n\n",
        format_timestamp(report.duration_seconds),
        report.total_words,
        report.wpm
    ));

    if !report.degraded.is_empty() {
        output.push_str(&format!(
            "_Degraded sections (reported as neutral defaults): {}_\n\n",
            report.degraded.join(", ")
        ));
    }

    // Summary
    output.push_str("## Summary\n\n");
    output.push_str(&report.summary);
    output.push_str("\n\n");

    // Filler words
    output.push_str("## Filler Words\n\n");
    if report.filler.by_word.is_empty() {
        output.push_str("None detected.\n");
    } else {
        output.push_str(&format!("Total: {}\n\n", report.filler.total));
        for (word, count) in &report.filler.by_word {
            output.push_str(&format!("• {} × {}\n", word, count));
        }
    }
    output.push('\n');

    // Sentiment timeline
    output.push_str("## Sentiment Timeline\n\n");
    for point in &report.sentiment {
        output.push_str(&format!(
            "[{}–{}] {} ({:+.2})\n",
            format_timestamp(point.start),
            format_timestamp(point.end),
            sentiment_label_name(point.label),
            point.polarity
        ));
    }
    output.push_str(&format!("\nMean polarity: {:+.2}\n\n", report.mean_polarity));

    // Keyword coverage
    output.push_str("## Keyword Coverage\n\n");
    if report.keywords.found.is_empty() && report.keywords.missing.is_empty() {
        output.push_str("No keywords configured.\n");
    } else {
        output.push_str(&format!(
            "Found: {}\n",
            if report.keywords.found.is_empty() {
                "—".to_string()
            } else {
                report
                    .keywords
                    .found
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        ));
        output.push_str(&format!(
            "Missing: {}\n",
            if report.keywords.missing.is_empty() {
                "—".to_string()
            } else {
                report
                    .keywords
                    .missing
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            }
        ));
    }
    output.push('\n');

    // Suggestions
    output.push_str("## Suggestions\n\n");
    for (i, suggestion) in report.suggestions.iter().enumerate() {
        output.push_str(&format!("{}. {}\n", i + 1, suggestion));
    }
    output.push('\n');

    // Key points
    if !report.key_points.is_empty() {
        output.push_str("## Key Points\n\n");
        for point in &report.key_points {
            output.push_str(&format!("• {}\n", point));
        }
        output.push('\n');
    }

    output
}
