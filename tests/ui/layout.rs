use coursebuilder::ui::LayoutManager;
use ratatui::layout::Rect;

#[test]
fn test_main_layout_reserves_status_line() {
    let area = Rect::new(0, 0, 80, 24);
    let chunks = LayoutManager::main_layout(area);
    assert_eq!(chunks[0], Rect::new(0, 0, 80, 23));
    assert_eq!(chunks[1], Rect::new(0, 23, 80, 1));
}

#[test]
fn test_outline_gets_configured_width() {
    let area = Rect::new(0, 0, 120, 30);
    let chunks = LayoutManager::top_pane_layout(area, 30);
    assert_eq!(chunks[0].width, 30);
    assert_eq!(chunks[1].width, 90);
    assert_eq!(chunks[1].x, 30);
}

#[test]
fn test_outline_yields_on_narrow_terminals() {
    let area = Rect::new(0, 0, 45, 30);
    let chunks = LayoutManager::top_pane_layout(area, 40);
    println!("Narrow layout: {:?}", chunks);
    assert_eq!(chunks[0].width, 25, "course view keeps its minimum width");
    assert_eq!(chunks[1].width, 20);
}

#[test]
fn test_centered_rect_lines() {
    let area = Rect::new(0, 0, 100, 40);
    let popup = LayoutManager::centered_rect_lines(50, 10, area);
    assert_eq!(popup.height, 10);
    assert_eq!(popup.width, 50);
    assert!(popup.y > 0 && popup.y + popup.height < 40);
}
