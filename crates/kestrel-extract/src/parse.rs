/// Parse a single unstructured summary line into `(company, job_title)`.
///
/// Ordered textual pattern rules, first match wins. This is a lossy
/// heuristic, not a general parse: a title or company that itself
/// contains " at " is ambiguous and only resolves when the split
/// yields exactly two segments.
pub fn parse_title_company(text: &str) -> (String, String) {
    let text = text.trim();

    // "Job Title at Company" (most common form).
    let parts: Vec<&str> = text.split(" at ").collect();
    if parts.len() == 2 {
        let mut job_title = parts[0].trim();
        job_title = job_title.strip_prefix("former ").unwrap_or(job_title);
        job_title = job_title.strip_prefix("current ").unwrap_or(job_title);
        return (parts[1].trim().to_string(), job_title.trim().to_string());
    }

    // "Company, Department, Job Title": the last segment is usually
    // the title.
    if text.contains(',') {
        let segments: Vec<&str> = text.split(',').map(str::trim).collect();
        let company = segments[0].to_string();

        let mut job_title = segments[segments.len() - 1]
            .replace("Department Chair", "")
            .replace("Manager", "")
            .trim()
            .to_string();
        if let Some(stripped) = job_title.strip_suffix(',') {
            job_title = stripped.trim().to_string();
        }

        return (company, job_title);
    }

    // Bare title, no company.
    (String::new(), text.to_string())
}
