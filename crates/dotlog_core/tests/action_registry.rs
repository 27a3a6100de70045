use dotlog_core::{
    applicable_bar_actions, applicable_menu_actions, is_applicable, ActionContext, ActionType,
    Entry, EntryVariant,
};

const ALL_VARIANTS: [EntryVariant; 10] = [
    EntryVariant::Task,
    EntryVariant::Note,
    EntryVariant::Event,
    EntryVariant::Done,
    EntryVariant::Migrated,
    EntryVariant::Cancelled,
    EntryVariant::Question,
    EntryVariant::Answered,
    EntryVariant::Answer,
    EntryVariant::MovedToList,
];

fn entry_of(variant: EntryVariant) -> Entry {
    Entry::new(variant, "sample")
}

fn bar_types(entry: &Entry) -> Vec<ActionType> {
    applicable_bar_actions(entry, None)
        .iter()
        .map(|def| def.action)
        .collect()
}

fn menu_types(entry: &Entry, context: Option<&ActionContext>) -> Vec<ActionType> {
    applicable_menu_actions(entry, context)
        .iter()
        .map(|def| def.action)
        .collect()
}

#[test]
fn question_bar_includes_answer_excludes_migrate() {
    let question = entry_of(EntryVariant::Question);
    let bar = bar_types(&question);
    assert!(bar.contains(&ActionType::Answer));
    assert!(!bar.contains(&ActionType::Migrate));
}

#[test]
fn answer_applies_only_to_questions() {
    for variant in ALL_VARIANTS {
        let expected = variant == EntryVariant::Question;
        assert_eq!(
            is_applicable(ActionType::Answer, &entry_of(variant), None),
            expected,
            "answer predicate for {variant:?}"
        );
    }
}

#[test]
fn cancelled_entry_bar_swaps_cancel_for_uncancel() {
    let cancelled = entry_of(EntryVariant::Cancelled);
    let bar = bar_types(&cancelled);
    assert!(bar.contains(&ActionType::Uncancel));
    assert!(!bar.contains(&ActionType::Cancel));
    assert!(!bar.contains(&ActionType::Edit));
    assert!(!bar.contains(&ActionType::CycleType));

    let menu = menu_types(&cancelled, None);
    assert!(menu.contains(&ActionType::Uncancel));
    assert!(!menu.contains(&ActionType::Cancel));
    assert!(!menu.contains(&ActionType::Edit));
    assert!(!menu.contains(&ActionType::CycleType));
}

#[test]
fn active_task_bar_offers_cancel_not_uncancel() {
    let task = entry_of(EntryVariant::Task);
    let bar = bar_types(&task);
    assert!(bar.contains(&ActionType::Cancel));
    assert!(!bar.contains(&ActionType::Uncancel));
}

#[test]
fn cycle_priority_and_delete_apply_to_every_variant() {
    for variant in ALL_VARIANTS {
        let entry = entry_of(variant);
        assert!(is_applicable(ActionType::CyclePriority, &entry, None));
        assert!(is_applicable(ActionType::Delete, &entry, None));
    }
}

#[test]
fn cycle_type_applies_only_to_base_variants() {
    for variant in ALL_VARIANTS {
        let expected = matches!(
            variant,
            EntryVariant::Task | EntryVariant::Note | EntryVariant::Event | EntryVariant::Question
        );
        assert_eq!(
            is_applicable(ActionType::CycleType, &entry_of(variant), None),
            expected,
            "cycleType predicate for {variant:?}"
        );
    }
}

#[test]
fn migrate_and_move_to_list_apply_only_to_tasks() {
    for variant in ALL_VARIANTS {
        let expected = variant == EntryVariant::Task;
        let entry = entry_of(variant);
        assert_eq!(is_applicable(ActionType::Migrate, &entry, None), expected);
        assert_eq!(is_applicable(ActionType::MoveToList, &entry, None), expected);
    }
}

#[test]
fn add_child_excludes_only_questions() {
    for variant in ALL_VARIANTS {
        let expected = variant != EntryVariant::Question;
        assert_eq!(
            is_applicable(ActionType::AddChild, &entry_of(variant), None),
            expected,
            "addChild predicate for {variant:?}"
        );
    }
}

#[test]
fn move_to_root_depends_on_parent_context() {
    let task = entry_of(EntryVariant::Task);

    let rooted = menu_types(&task, Some(&ActionContext { has_parent: false }));
    assert!(!rooted.contains(&ActionType::MoveToRoot));

    let nested = menu_types(&task, Some(&ActionContext { has_parent: true }));
    assert!(nested.contains(&ActionType::MoveToRoot));
}

#[test]
fn menu_is_a_superset_of_bar_for_any_variant() {
    for variant in ALL_VARIANTS {
        let entry = entry_of(variant);
        let context = ActionContext { has_parent: true };
        let bar = bar_types(&entry);
        let menu = menu_types(&entry, Some(&context));
        for action in bar {
            assert!(menu.contains(&action), "{action} in bar but not menu");
        }
    }
}
