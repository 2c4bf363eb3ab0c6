// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_screenplay(scenes: usize) -> String {
    let mut content = String::from("# Generated for benchmarking\n\n");

    for scene in 0..scenes {
        content.push_str(&format!("INT. LOCATION {scene} - DAY\n\n"));
        content.push_str("Rain hammers the windows. A kettle whistles.\n\n");
        for speaker in ["ALICE", "BOB (O.S.)"] {
            content.push_str(speaker);
            content.push_str("\n(beat)\nwe should talk about what happened.\nnot here.\n\n");
        }
        content.push_str("> CUT TO:\n\n");
    }

    content
}
