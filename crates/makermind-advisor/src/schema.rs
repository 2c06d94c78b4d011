use gemini_client::Schema;

/// One project record as the service is asked to emit it. `color` is
/// assigned locally and is not part of the schema.
pub fn project() -> Schema {
    Schema::object([
        ("id", Schema::string()),
        ("title", Schema::string()),
        ("description", Schema::string()),
        ("category", Schema::string()),
        ("timeEstimate", Schema::string()),
        ("matchScore", Schema::integer()),
        ("missingTools", Schema::array_of(Schema::string())),
        ("missingMaterials", Schema::array_of(Schema::string())),
        ("materials", Schema::array_of(Schema::string())),
        (
            "diyAlternatives",
            Schema::array_of(Schema::object([
                ("material", Schema::string()),
                ("instruction", Schema::string()),
            ])),
        ),
        ("steps", Schema::array_of(Schema::string())),
        ("costEstimate", Schema::number()),
    ])
}

pub fn project_list() -> Schema {
    Schema::array_of(project())
}
