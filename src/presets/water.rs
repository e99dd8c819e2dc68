use super::ThemePreset;

pub(super) const WATER: ThemePreset = ThemePreset {
    theme: "water",
    defaults: &[
        ("deity_color", "blue"),
        ("preferred_time", "any"),
        ("environment", "aquatic places"),
        ("primary_biome", "minecraft:ocean"),
        ("secondary_biome", "minecraft:river"),
        ("tertiary_biome", "minecraft:swamp"),
        ("primary_effect", "minecraft:water_breathing"),
        ("secondary_effect", "minecraft:dolphins_grace"),
        ("communion_effect_1", "minecraft:dolphins_grace"),
        ("communion_effect_2", "minecraft:water_breathing"),
        ("effect_duration", "600"),
        ("effect_level", "0"),
        ("resource_type", "pearls"),
        ("entity_type", "guardians"),
        ("ritual_type", "tide"),
        ("item_type", "crystal"),
        ("location_type", "depths"),
        ("target_entity", "minecraft:guardian"),
        ("reward_item_1", "minecraft:heart_of_the_sea"),
        ("count_1", "1"),
        ("reward_item_2", "eidolon:water_gem"),
        ("count_2", "2"),
        ("reward_item_3", "minecraft:trident"),
        ("count_3", "1"),
        ("reward_item_4", "minecraft:water_crystal"),
        ("count_4", "1"),
        ("deity_influence", "calm and renewal"),
        ("power_type", "the endless tide"),
    ],
    literals: &[
        ("speaking_style", "flowing wisdom and serene depths"),
        ("personality_traits", "patient understanding and adaptive nature"),
        ("rewarded_behaviors", "seek balance and flow with change"),
        ("sought_qualities", "adaptability and emotional depth"),
        ("follower_benefits", "peace and flexibility"),
        ("deity_realm", "endless oceans and gentle streams"),
        ("low_rep_attitude", "indifferent"),
        ("low_rep_tone", "distant coolness"),
        ("mid_low_rep_tone", "warming interest"),
        ("mid_rep_benefits", "wisdom"),
        ("high_rep_status", "flowing faith"),
        ("max_rep_rewards", "mastery over all waters and storm calling"),
        ("basic_knowledge", "currents"),
        ("intermediate_knowledge", "water magic"),
        ("advanced_knowledge", "storm mastery"),
        ("secret_knowledge", "forbidden tide arts"),
        ("curse_effects", "drowning weakness and crushing depths"),
        ("opposing_forces", "fire and earth deities"),
        ("punishment_effects", "tidal curses"),
        ("blessing_type", "water blessings"),
        ("optimal_time", "the flowing hours of rain"),
        ("favored_places", "coastal regions and deep waters"),
        ("special_artifacts", "tidal artifacts"),
        ("milestone_gifts", "water gems"),
        ("devotion_rewards", "flowing essences and tide crystals"),
        ("opposing_time", "the scorching heat"),
        ("authority_level", "serene"),
        ("biome_description", "endless ocean"),
        ("secondary_description", "flowing river"),
        ("tertiary_description", "murky swampland"),
        ("tertiary_reaction", "whispers ancient secrets"),
        ("attention_style", "flowing focus"),
        ("connection_medium", "tides"),
        ("communication_type", "prayer"),
        ("acknowledgment_style", "gentle approval"),
        ("cooldown_reason", "let the tides flow"),
        ("interaction_type", "communion"),
        ("unavailability_reason", "guiding distant storms"),
        ("interference_type", "muddied by conflicting currents"),
        ("barrier_type", "barrier of opposing elements"),
        ("blessing_description", "mastery over water"),
        ("prayer_type", "tide prayer"),
        ("divine_response", "flowing power"),
        ("deity_domain_singular", "water"),
        ("communion_item_1", "minecraft:heart_of_the_sea"),
        ("communion_item_2", "minecraft:prismarine_crystals"),
        ("communion_experience", "the depths of all oceans"),
        ("communion_medium", "sacred tides"),
        ("shared_knowledge", "the mysteries of eternal flow"),
        ("communion_ritual", "tidal convergence"),
    ],
};
