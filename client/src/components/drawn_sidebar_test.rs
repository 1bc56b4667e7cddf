use super::*;

#[test]
fn slot_labels_cover_both_rail_ranges() {
    assert_eq!(SidebarSide::Left.slot_label(), "1-16");
    assert_eq!(SidebarSide::Right.slot_label(), "17-32");
}

#[test]
fn modifier_classes_are_distinct() {
    assert_eq!(SidebarSide::Left.modifier_class(), "drawn-sidebar--left");
    assert_eq!(SidebarSide::Right.modifier_class(), "drawn-sidebar--right");
}
