// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard page shell and its script.

pub const DASHBOARD_HTML: &str = r#"<!doctype html>
<html lang="en">

<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Race_Publica</title>
  <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
  <style>
    body { margin: 0; font-family: system-ui, sans-serif; color: #262730; }
    main { padding: 1.5rem 3rem; max-width: none; }
    h1 { margin: 0 0 0.25rem; font-size: 2rem; }
    .caption { color: #808495; font-size: 0.85rem; margin-bottom: 1rem; }
    .notice { padding: 0.75rem 1rem; border-radius: 0.5rem; margin: 0.75rem 0; }
    .notice.info { background: #e8f0fe; color: #1c4587; }
    .notice.warning { background: #fff8e1; color: #7a5a00; }
    .notice.error { background: #fdecea; color: #8a1c1c; }
    #map { width: 100%; border-radius: 0.5rem; }
    table { border-collapse: collapse; font-size: 0.9rem; }
    th, td { border: 1px solid #e6e6ea; padding: 0.3rem 0.6rem; text-align: left; }
    th { background: #f5f5f7; }
  </style>
</head>

<body>
  <main>
    <h1 id="title">Race_Publica</h1>
    <div id="caption" class="caption"></div>
    <div id="notices"></div>
    <div id="map" hidden></div>
    <section id="legend"></section>
    <section id="routes"></section>
  </main>
  <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
  <script src="/static/dashboard.js"></script>
</body>

</html>
"#;

pub const DASHBOARD_JS: &str = r#"'use strict';

function escapeHtml(text) {
  return String(text)
    .replace(/&/g, '&amp;')
    .replace(/</g, '&lt;')
    .replace(/>/g, '&gt;')
    .replace(/"/g, '&quot;')
    .replace(/'/g, '&#39;');
}

// Legend lines use **bold** and `code` markers only.
function inlineMarkdown(text) {
  return escapeHtml(text)
    .replace(/\*\*(.+?)\*\*/g, '<strong>$1</strong>')
    .replace(/`(.+?)`/g, '<code>$1</code>');
}

function showNotice(level, message) {
  const div = document.createElement('div');
  div.className = 'notice ' + level;
  div.innerHTML = inlineMarkdown(message);
  document.getElementById('notices').appendChild(div);
}

function drawMap(view, height) {
  const el = document.getElementById('map');
  el.style.height = height + 'px';
  el.hidden = false;

  const map = L.map(el).setView(view.center, view.zoom);
  L.tileLayer(view.tiles, { attribution: view.attribution, maxZoom: 19 }).addTo(map);

  // One toggleable group per color bucket
  const groups = {};
  for (const group of view.groups) {
    groups[group.color] = L.layerGroup().addTo(map);
  }

  for (const layer of view.layers) {
    const style = layer.style;
    L.geoJSON(layer.geometry, { style: () => style })
      .bindTooltip(escapeHtml(layer.tooltip))
      .addTo(groups[style.color]);
  }

  if (view.groups.length > 0) {
    const overlays = {};
    for (const group of view.groups) {
      overlays[escapeHtml(group.label) + ' (' + group.count + ')'] = groups[group.color];
    }
    L.control.layers(null, overlays, { collapsed: false }).addTo(map);
  }
}

function drawLegend(heading, lines) {
  const section = document.getElementById('legend');
  const items = lines.map((l) => '<li>' + inlineMarkdown(l) + '</li>').join('');
  section.innerHTML = '<h3>' + escapeHtml(heading) + '</h3><ul>' + items + '</ul>';
}

function cell(value) {
  if (value === null || value === undefined) return '';
  if (typeof value === 'object') return escapeHtml(JSON.stringify(value));
  return escapeHtml(value);
}

function drawRoutes(panel) {
  const section = document.getElementById('routes');
  if (panel.kind === 'table') {
    const head = panel.table.columns.map((c) => '<th>' + escapeHtml(c) + '</th>').join('');
    const rows = panel.table.rows
      .map((r) => '<tr>' + r.map((v) => '<td>' + cell(v) + '</td>').join('') + '</tr>')
      .join('');
    section.innerHTML = '<h2>' + escapeHtml(panel.heading) + '</h2>' +
      '<table><thead><tr>' + head + '</tr></thead><tbody>' + rows + '</tbody></table>';
  } else {
    const div = document.createElement('div');
    div.className = 'notice ' + panel.kind;
    div.innerHTML = inlineMarkdown(panel.message);
    section.appendChild(div);
  }
}

async function main() {
  let response;
  try {
    response = await fetch('/api/page');
  } catch (e) {
    showNotice('error', 'Could not reach the server: ' + e);
    return;
  }

  const body = await response.json();
  if (!response.ok) {
    showNotice('error', body.details || body.error);
    return;
  }

  document.title = body.title;
  document.getElementById('title').textContent = body.title;
  document.getElementById('caption').textContent = body.caption;
  for (const n of body.notices) showNotice(n.level, n.message);

  if (typeof L === 'undefined') {
    showNotice('error', 'Import error: map library failed to load');
    return;
  }

  drawMap(body.map, body.map_height);
  drawLegend(body.legend_heading, body.legend);
  drawRoutes(body.routes);
}

main();
"#;
