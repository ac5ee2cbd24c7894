use super::{extract_technologies, join_first};

/// Render a system-design document from the technologies found in each dump.
/// Purely a template: the same dumps always render the same Markdown. The
/// frontend and backend subsections are omitted when nothing was detected in
/// the corresponding dump.
pub fn generate_system_design(backend_text: &str, frontend_text: &str) -> String {
    let backend_techs = extract_technologies(backend_text);
    let frontend_techs = extract_technologies(frontend_text);

    let mut design = String::from("## Architecture Overview\n\n");
    design.push_str(
        "This project uses a modern full-stack architecture with clear separation between frontend and backend.\n\n",
    );

    if !frontend_techs.is_empty() {
        design.push_str("### Frontend Architecture\n\n");
        design.push_str(&format!(
            "The frontend is built using {}.\n\n",
            join_first(&frontend_techs, 3)
        ));
        design.push_str(&format!(
            "- **Key Technologies**: {}\n",
            join_first(&frontend_techs, 5)
        ));
        design.push_str("- **State Management**: Context API or similar\n");
        design.push_str("- **Styling**: Tailwind CSS or similar\n\n");
    }

    if !backend_techs.is_empty() {
        design.push_str("### Backend Architecture\n\n");
        design.push_str(&format!(
            "The backend is built using {}.\n\n",
            join_first(&backend_techs, 3)
        ));
        design.push_str("- **Framework**: Express.js or similar\n");
        design.push_str("- **Database**: PostgreSQL or similar\n");
        design.push_str(&format!(
            "- **Key Technologies**: {}\n\n",
            join_first(&backend_techs, 5)
        ));
    }

    design.push_str("### Deployment\n\n");
    design.push_str("- Frontend deployed on Vercel or similar platform\n");
    design.push_str("- Backend deployed on cloud platform (Azure, AWS, etc.)\n");
    design.push_str("- Database hosted on managed service\n");

    design
}
