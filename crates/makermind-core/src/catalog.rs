//! Fixed catalogs offered during onboarding and used for presentation tags.

use crate::error::{MakerError, Result};
use serde::Serialize;

// ---------------------------------------------------------------------------
// Tools
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ToolCategory {
    General,
    Woodworking,
    Baking,
    Cooking,
    Textile,
    Crafting,
    #[serde(rename = "Basic Supplies")]
    BasicSupplies,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Tool {
    pub id: &'static str,
    pub name: &'static str,
    pub category: ToolCategory,
}

const fn tool(id: &'static str, name: &'static str, category: ToolCategory) -> Tool {
    Tool { id, name, category }
}

pub const COMMON_TOOLS: &[Tool] = &[
    tool("t1", "Hammer", ToolCategory::General),
    tool("t2", "Drill", ToolCategory::General),
    tool("t9", "Miter Saw", ToolCategory::Woodworking),
    tool("t10", "Sander", ToolCategory::Woodworking),
    tool("t17", "Dremel/Rotary Tool", ToolCategory::Woodworking),
    tool("t24", "Jigsaw", ToolCategory::Woodworking),
    tool("t13", "Soldering Iron", ToolCategory::General),
    tool("t18", "3D Printer", ToolCategory::General),
    tool("t3", "Stand Mixer", ToolCategory::Baking),
    tool("t4", "Rolling Pin", ToolCategory::Baking),
    tool("t12", "Oven", ToolCategory::Baking),
    tool("t23", "Blender", ToolCategory::Cooking),
    tool("t19", "Pasta Maker", ToolCategory::Cooking),
    tool("t25", "Food Processor", ToolCategory::Cooking),
    tool("t26", "Cast Iron Skillet", ToolCategory::Cooking),
    tool("t27", "Dutch Oven", ToolCategory::Cooking),
    tool("t28", "Chef's Knife Set", ToolCategory::Cooking),
    tool("t29", "Muffin/Cupcake Tin", ToolCategory::Baking),
    tool("t30", "Baking Sheets", ToolCategory::Baking),
    tool("t31", "Piping Bags/Tips", ToolCategory::Baking),
    tool("t32", "Digital Scale", ToolCategory::Baking),
    tool("t33", "Hand Mixer", ToolCategory::Baking),
    tool("t34", "Slow Cooker/Crockpot", ToolCategory::Cooking),
    tool("t5", "Sewing Machine", ToolCategory::Textile),
    tool("t6", "Embroidery Hoop", ToolCategory::Textile),
    tool("t14", "Knitting Needles", ToolCategory::Textile),
    tool("t15", "Crochet Hook", ToolCategory::Textile),
    tool("t21", "Serger", ToolCategory::Textile),
    tool("t7", "Glue Gun", ToolCategory::Crafting),
    tool("t8", "Cricut/Die Cutter", ToolCategory::Crafting),
    tool("t11", "Paint Brushes", ToolCategory::Crafting),
    tool("t16", "Potter's Wheel", ToolCategory::Crafting),
    tool("t20", "Jewelry Pliers", ToolCategory::Crafting),
    tool("t22", "Easel", ToolCategory::Crafting),
    tool("t35", "Paper Trimmer", ToolCategory::Crafting),
    tool("t36", "X-Acto/Precision Knife", ToolCategory::Crafting),
    tool("s1", "Cardboard Stash", ToolCategory::BasicSupplies),
    tool("s2", "Scrap Paper/Magazines", ToolCategory::BasicSupplies),
    tool("s3", "Bead Collection", ToolCategory::BasicSupplies),
    tool("s4", "Acrylic Paints", ToolCategory::BasicSupplies),
    tool("s5", "Mod Podge/Glue", ToolCategory::BasicSupplies),
    tool("s6", "Polymer/Air Dry Clay", ToolCategory::BasicSupplies),
    tool("s7", "Yarn Scraps", ToolCategory::BasicSupplies),
    tool("s8", "Fabric Scraps", ToolCategory::BasicSupplies),
];

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Serialize)]
pub struct StyleOption {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

const fn style(id: &'static str, name: &'static str, color: &'static str) -> StyleOption {
    StyleOption { id, name, color }
}

pub const STYLE_OPTIONS: &[StyleOption] = &[
    style("mexican-folk", "Mexican Folk", "bg-rosa-500"),
    style("maximalist", "Maximalist", "bg-sol-500"),
    style("boho", "Bohemian", "bg-naranja-500"),
    style("cottagecore", "Cottagecore", "bg-verde-500"),
    style("rustic", "Rustic", "bg-azul-700"),
    style("eclectic", "Eclectic", "bg-morado-500"),
    style("industrial", "Industrial", "bg-gray-800"),
    style("art-deco", "Art Deco", "bg-cobalt-500"),
    style("forest", "Forest/Nature", "bg-verde-700"),
    style("surrealist", "Surrealist", "bg-rosa-700"),
    style("mid-century", "Mid-Century", "bg-naranja-700"),
    style("gothic", "Gothic", "bg-black"),
];

pub fn find_style(id: &str) -> Option<&'static StyleOption> {
    STYLE_OPTIONS.iter().find(|s| s.id == id)
}

pub const SKILL_CATEGORIES: &[&str] = &[
    "Baking",
    "Cooking",
    "Woodworking",
    "Sewing",
    "Painting",
    "General Crafting",
    "Pottery",
    "Jewelry",
];

/// Presentation tags a recommended project can be painted with.
pub const PROJECT_COLORS: &[&str] = &[
    "bg-rosa-500",
    "bg-azul-500",
    "bg-sol-500",
    "bg-naranja-500",
    "bg-verde-500",
    "bg-morado-500",
    "bg-cobalt-500",
];

// ---------------------------------------------------------------------------
// Week days
// ---------------------------------------------------------------------------

pub const WEEK_DAYS: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Map user input ("mon", "monday", "MONDAY") onto the canonical day name.
pub fn canonical_day(input: &str) -> Result<&'static str> {
    let lower = input.trim().to_ascii_lowercase();
    if lower.len() >= 3 {
        if let Some(day) = WEEK_DAYS
            .iter()
            .find(|d| d.to_ascii_lowercase().starts_with(&lower))
        {
            return Ok(*day);
        }
    }
    Err(MakerError::UnknownDay(input.to_string()))
}
